//! Terminal rendering for transcript entries.

use console::style;

use crate::transcript::{Entry, Sender};

/// Label shown above an entry. Errors get a dedicated label regardless of
/// who produced them.
pub fn entry_label(entry: &Entry) -> &'static str {
    if entry.is_error {
        "Error"
    } else {
        entry.sender.label()
    }
}

/// Render one entry for the terminal: styled label, timestamp, then the
/// message text verbatim.
pub fn render_entry(entry: &Entry) -> String {
    let label = entry_label(entry);
    let styled_label = if entry.is_error {
        style(label).red().bold()
    } else {
        match entry.sender {
            Sender::User => style(label).cyan().bold(),
            Sender::System => style(label).dim().bold(),
            Sender::Api => style(label).magenta().bold(),
        }
    };
    let timestamp = style(entry.at.format("%H:%M:%S").to_string()).dim();
    format!("{styled_label} {timestamp}\n{}\n", entry.text)
}

/// Print one entry to stdout.
pub fn print_entry(entry: &Entry) {
    println!("{}", render_entry(entry));
}

/// REPL command reference.
pub fn help_text() -> &'static str {
    "Type a question and press Enter to ask the backend.\n\
     Commands:\n\
     \x20 /file <path>   select a document (.pdf, .txt, .docx)\n\
     \x20 /file          clear the selection\n\
     \x20 /upload        upload the selected document\n\
     \x20 /clear         clear the backend's vector database\n\
     \x20 /help          show this help\n\
     \x20 /quit          exit"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Transcript;

    fn entry(sender: Sender, text: &str, is_error: bool) -> Entry {
        let mut log = Transcript::new();
        if is_error {
            log.push_error(sender, text);
        } else {
            log.push(sender, text);
        }
        log.last().unwrap().clone()
    }

    #[test]
    fn error_entries_get_the_error_label() {
        let e = entry(Sender::System, "boom", true);
        assert_eq!(entry_label(&e), "Error");
    }

    #[test]
    fn labels_follow_the_sender() {
        assert_eq!(entry_label(&entry(Sender::User, "hi", false)), "You");
        assert_eq!(entry_label(&entry(Sender::System, "ok", false)), "System");
        assert_eq!(entry_label(&entry(Sender::Api, "a", false)), "RAG Engine");
    }

    #[test]
    fn rendered_entry_contains_the_text_verbatim() {
        let e = entry(Sender::Api, "Answer: 30 days\n\nSources:\ndoc.pdf p.2", false);
        let rendered = render_entry(&e);
        assert!(rendered.contains("Answer: 30 days\n\nSources:\ndoc.pdf p.2"));
    }

    #[test]
    fn help_lists_every_command() {
        for cmd in ["/file", "/upload", "/clear", "/help", "/quit"] {
            assert!(help_text().contains(cmd));
        }
    }
}
