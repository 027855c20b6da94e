//! Renders Slack threads into the markdown-like text the segmenter reads.

/// One thread: the parent message and its replies in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub parent: String,
    pub replies: Vec<String>,
}

impl Thread {
    pub fn new(parent: impl Into<String>, replies: Vec<String>) -> Self {
        Self {
            parent: parent.into(),
            replies,
        }
    }

    /// Renders the summary block for this thread, terminated by a `---` rule.
    pub fn render(&self) -> String {
        let mut out = String::from("## Thread Summary\n\n");
        out.push_str(&format!("**Parent Message:** {}\n\n", self.parent));
        out.push_str(&format!("**Number of Replies:** {}\n\n", self.replies.len()));
        if !self.replies.is_empty() {
            out.push_str("**Replies:**\n");
            for reply in &self.replies {
                out.push_str(&format!("- {reply}\n"));
            }
        }
        out.push_str("\n---\n\n");
        out
    }
}

/// Renders every thread in order into one text.
pub fn render_all(threads: &[Thread]) -> String {
    threads.iter().map(Thread::render).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_document, parsing::blocks::BlockKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_template() {
        let thread = Thread::new("hi", vec!["first".into(), "second".into()]);
        assert_eq!(
            thread.render(),
            "## Thread Summary\n\n\
             **Parent Message:** hi\n\n\
             **Number of Replies:** 2\n\n\
             **Replies:**\n\
             - first\n\
             - second\n\
             \n---\n\n"
        );
    }

    #[test]
    fn no_replies_section_without_replies() {
        let rendered = Thread::new("lonely", vec![]).render();
        assert!(rendered.contains("**Number of Replies:** 0"));
        assert!(!rendered.contains("**Replies:**"));
    }

    #[test]
    fn rendered_summary_converts_cleanly() {
        let text = render_all(&[
            Thread::new("hi", vec!["first".into()]),
            Thread::new("bye", vec![]),
        ]);
        let (doc, errors) = build_document(&text);

        assert!(errors.is_empty());
        let kinds: Vec<BlockKind> = doc.blocks().iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::BulletItem,
                BlockKind::Paragraph,
                BlockKind::Heading,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
                BlockKind::Paragraph,
            ]
        );
        assert_eq!(doc.blocks()[1].plain_text(), "Parent Message: hi");
        assert!(doc.blocks()[1].spans()[0].bold);
        assert_eq!(doc.blocks()[5].plain_text(), "---");
    }

    #[test]
    fn no_threads_render_nothing() {
        assert_eq!(render_all(&[]), "");
    }
}
