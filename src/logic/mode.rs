//! Editing-session model and the toggleable SQL indentation mode.
//!
//! A [`Session`] owns a document and the handler currently bound to the
//! host's "indent line" action. [`IndentationMode`] rebinds that action to
//! the SQL indenter while active and hands the previous handler back when
//! deactivated.
use super::indenter::{on_cursor_line, rewrite_indentation};
use crate::*;
use std::fmt::Debug;

/// The host's "indent current line" action.
pub trait IndentHandler: Debug {
    fn name(&self) -> &str;

    /// Indent the line holding the document's cursor.
    fn indent_line(&self, document: &mut Document);
}

/// Host default: indent like the previous non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeIndent {
    pub tab_width: usize,
}

impl Default for RelativeIndent {
    fn default() -> Self {
        Self { tab_width: 8 }
    }
}

impl IndentHandler for RelativeIndent {
    fn name(&self) -> &str {
        "relative"
    }

    fn indent_line(&self, document: &mut Document) {
        let tab_width = self.tab_width;
        on_cursor_line(document, |document, line_start| {
            let indent = previous_line_state(document, line_start, tab_width).indent;
            rewrite_indentation(document, line_start, indent, tab_width)
        });
    }
}

/// SQL indentation bound as an [`IndentHandler`].
#[derive(Debug, Clone)]
pub struct SqlIndent<C = SqlScanner> {
    config: Config,
    classifier: C,
}

impl<C: LexicalClassifier> SqlIndent<C> {
    pub fn new(config: Config, classifier: C) -> Self {
        Self { config, classifier }
    }
}

impl<C: LexicalClassifier + Debug> IndentHandler for SqlIndent<C> {
    fn name(&self) -> &str {
        "sql"
    }

    fn indent_line(&self, document: &mut Document) {
        super::indenter::indent_line(document, &self.classifier, &self.config);
    }
}

#[derive(Debug)]
pub struct Session {
    document: Document,
    handler: Box<dyn IndentHandler>,
}

impl Session {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            handler: Box::new(RelativeIndent::default()),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn handler_name(&self) -> &str {
        self.handler.name()
    }

    /// Bind `handler` to the indent action, returning the one it replaces.
    pub fn bind_indent_handler(
        &mut self,
        handler: Box<dyn IndentHandler>,
    ) -> Box<dyn IndentHandler> {
        std::mem::replace(&mut self.handler, handler)
    }

    /// Invoke whatever handler is bound to the indent action.
    pub fn indent_line(&mut self) {
        self.handler.indent_line(&mut self.document);
    }
}

/// Toggleable SQL indentation for one session.
#[derive(Debug)]
pub struct IndentationMode<C = SqlScanner> {
    config: Config,
    classifier: C,
    saved: Option<Box<dyn IndentHandler>>,
}

impl IndentationMode<SqlScanner> {
    pub fn new(config: Config) -> Self {
        Self::with_classifier(config, SqlScanner)
    }
}

impl<C> IndentationMode<C>
where
    C: LexicalClassifier + Clone + Debug + 'static,
{
    pub fn with_classifier(config: Config, classifier: C) -> Self {
        Self {
            config,
            classifier,
            saved: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.saved.is_some()
    }

    /// Bind SQL indentation to the session's indent action. Does nothing when
    /// already active.
    pub fn activate(&mut self, session: &mut Session) {
        if self.is_active() {
            return;
        }
        let handler = SqlIndent::new(self.config.clone(), self.classifier.clone());
        let previous = session.bind_indent_handler(Box::new(handler));
        debug!("SQL indentation on, saved {} handler", previous.name());
        self.saved = Some(previous);
    }

    /// Restore the handler that was bound before [`Self::activate`]. Does
    /// nothing when inactive.
    pub fn deactivate(&mut self, session: &mut Session) {
        if let Some(previous) = self.saved.take() {
            debug!("SQL indentation off, restoring {} handler", previous.name());
            session.bind_indent_handler(previous);
        }
    }

    /// Flip the mode; returns whether it is now active.
    pub fn toggle(&mut self, session: &mut Session) -> bool {
        if self.is_active() {
            self.deactivate(session);
        } else {
            self.activate(session);
        }
        self.is_active()
    }

    /// Indent the whole session document with this mode's settings.
    pub fn indent_buffer(&self, session: &mut Session) -> usize {
        super::indenter::indent_buffer(session.document_mut(), &self.classifier, &self.config)
    }
}
