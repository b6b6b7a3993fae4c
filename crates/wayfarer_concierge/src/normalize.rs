//! Turn normalization for the remote API.
//!
//! The remote collaborator expects strictly alternating `user`/`model` turns
//! ending with the fresh user input. History may violate all of that:
//! system-role entries, consecutive same-role messages, or a trailing
//! assistant turn. Normalization repairs it without dropping content:
//!
//! - system-role entries are removed (the persona constant is the only
//!   system instruction sent);
//! - runs of same-role turns are collapsed by concatenation with a blank
//!   line, so every word of history is replayed;
//! - the current input is appended as its own final user turn unless the
//!   last history turn is already exactly that fresh user turn. It is never
//!   merged into an older user run.

use wayfarer_core::{Message, Role, Turn};

/// Build the normalized turn sequence for one orchestrator call.
pub fn normalize_turns(history: &[Message], input: &str) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::with_capacity(history.len() + 1);

    for message in history {
        if message.role == Role::System {
            continue;
        }

        match turns.last_mut() {
            Some(last) if last.role == message.role => {
                last.text.push_str("\n\n");
                last.text.push_str(&message.content);
            }
            _ => turns.push(Turn {
                role: message.role,
                text: message.content.clone(),
            }),
        }
    }

    let already_fresh = turns
        .last()
        .is_some_and(|last| last.role == Role::User && last.text == input);
    if !already_fresh {
        turns.push(Turn::user(input));
    }

    turns
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_core::Message;

    fn system(text: &str) -> Message {
        Message {
            role: Role::System,
            ..Message::user(text)
        }
    }

    #[test]
    fn empty_history_yields_single_user_turn() {
        let turns = normalize_turns(&[], "hello");
        assert_eq!(turns, vec![Turn::user("hello")]);
    }

    #[test]
    fn fresh_trailing_user_turn_is_not_duplicated() {
        let history = vec![
            Message::user("first question"),
            Message::assistant("first answer"),
            Message::user("second question"),
        ];
        let turns = normalize_turns(&history, "second question");
        assert_eq!(turns.len(), 3);
        assert_eq!(turns.last().unwrap().text, "second question");
    }

    #[test]
    fn consecutive_same_role_turns_collapse_by_concatenation() {
        let history = vec![
            Message::user("part one"),
            Message::user("part two"),
            Message::assistant("reply"),
        ];
        let turns = normalize_turns(&history, "next");
        assert_eq!(turns[0].text, "part one\n\npart two");
        assert_eq!(turns[1].text, "reply");
        assert_eq!(turns[2], Turn::user("next"));
    }

    #[test]
    fn system_entries_are_dropped() {
        let history = vec![
            system("internal note"),
            Message::user("question"),
            Message::assistant("answer"),
        ];
        let turns = normalize_turns(&history, "question two");
        assert!(turns.iter().all(|turn| turn.role != Role::System));
        assert_eq!(turns.len(), 3);
    }

    #[test]
    fn stale_trailing_user_turn_gets_a_fresh_final_turn() {
        let history = vec![Message::user("old unanswered question")];
        let turns = normalize_turns(&history, "new question");
        // the input stays its own turn so the final turn is exactly the input
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].text, "old unanswered question");
        assert_eq!(turns[1], Turn::user("new question"));
    }

    #[test]
    fn roles_strictly_alternate_after_collapse() {
        let history = vec![
            Message::user("a"),
            Message::assistant("b"),
            Message::assistant("c"),
            Message::user("d"),
            Message::assistant("e"),
        ];
        let turns = normalize_turns(&history, "f");
        let roles: Vec<Role> = turns.iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant, Role::User]);
    }
}
