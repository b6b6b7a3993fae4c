use clap::Parser;
use std::io::{BufRead, Write};
use wayfarer::{
    ChatReply, Cli, Commands, Concierge, ConciergeConfig, ImageGeneration, Message, MessageKind,
    VideoGeneration,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    wayfarer::init_telemetry();

    let cli = Cli::parse();
    let concierge = Concierge::new(ConciergeConfig::load().unwrap_or_default());

    match cli.command {
        Commands::Chat => chat_repl(&concierge).await?,

        Commands::Ask { prompt } => {
            let reply = concierge.send_message(&[], &prompt).await;
            print_reply(&reply);
        }

        Commands::Image { prompt, output } => {
            let Some(client) = concierge.try_acquire() else {
                eprintln!("image synthesis needs a configured GEMINI_API_KEY");
                std::process::exit(1);
            };
            let image = client.generate_image(&prompt).await?;
            std::fs::write(&output, &image.data)?;
            println!("wrote {} ({} bytes, {})", output.display(), image.data.len(), image.mime);
        }

        Commands::Video { prompt } => {
            let Some(client) = concierge.try_acquire() else {
                eprintln!("video synthesis needs a configured GEMINI_API_KEY");
                std::process::exit(1);
            };
            let video = client.generate_video(&prompt).await?;
            println!("{}", video.uri);
        }
    }

    Ok(())
}

/// Interactive loop. One outstanding call at a time: the next prompt is not
/// read until the previous reply has settled.
async fn chat_repl(concierge: &Concierge) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut history: Vec<Message> = Vec::new();

    println!("Sage is listening. Type a question, or \"exit\" to leave.");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        // empty/whitespace-only input is rejected here, upstream of the orchestrator
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            break;
        }

        history.push(Message::user(input));
        let reply = concierge.send_message(&history, input).await;
        print_reply(&reply);

        let mut message = Message::assistant(reply.text.clone());
        message.sources = reply.sources.clone();
        if reply.lead_trigger {
            message.kind = MessageKind::LeadCapture;
        }
        history.push(message);
    }

    Ok(())
}

fn print_reply(reply: &ChatReply) {
    println!("{}", reply.text);
    for source in &reply.sources {
        println!("  · {} — {}", source.title, source.uri);
    }
    if reply.lead_trigger {
        println!("  [Sage would love your email — join the Health & Travels list.]");
    }
}
