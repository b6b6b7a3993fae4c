// Integration tests against the real Gemini Live API.
//
// Gated behind the `api` marker feature; requires GEMINI_API_KEY and network
// access to the WebSocket endpoint.

use wayfarer_models::{GeminiLiveClient, LiveEvent};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn handshake_and_clean_close() {
    let _ = dotenvy::dotenv();
    let client = GeminiLiveClient::from_env().expect("Failed to create client");

    let session = client
        .connect("models/gemini-2.0-flash-live-001", Some("You are a travel concierge."))
        .await
        .expect("handshake failed");

    session.close().await.expect("close failed");
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)] // Requires GEMINI_API_KEY
async fn audio_chunk_elicits_a_server_turn() {
    let _ = dotenvy::dotenv();
    let client = GeminiLiveClient::from_env().expect("Failed to create client");

    let mut session = client
        .connect("models/gemini-2.0-flash-live-001", None)
        .await
        .expect("handshake failed");

    // a tenth of a second of silence at 16 kHz
    session
        .send_audio_chunk(&[0i16; 1600])
        .await
        .expect("send failed");

    // drain events until the turn completes or the server closes
    while let Some(event) = session.next_event().await.expect("receive failed") {
        if matches!(event, LiveEvent::TurnComplete) {
            break;
        }
    }
}
