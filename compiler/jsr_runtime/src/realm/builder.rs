//! `RealmBuilder` for creating realms with a chosen output channel.

use super::Realm;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for configured realms.
///
/// By default the built realm prints to stdout and is bootstrapped with the
/// standard natives:
///
/// ```text
/// let handler = buffer_handler();
/// let realm = Realm::builder().print_handler(handler.clone()).build();
/// ```
#[derive(Debug)]
pub struct RealmBuilder {
    print_handler: Option<SharedPrintHandler>,
    stdlib: bool,
}

impl RealmBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            stdlib: true,
        }
    }

    /// Set the destination for `print`. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Skip installing the standard natives.
    #[must_use]
    pub fn without_stdlib(mut self) -> Self {
        self.stdlib = false;
        self
    }

    pub fn build(self) -> Realm {
        let handler = self.print_handler.unwrap_or_else(stdout_handler);
        let mut realm = Realm::with_print_handler(handler);
        if self.stdlib {
            realm.initialize();
        }
        realm
    }
}

impl Default for RealmBuilder {
    fn default() -> Self {
        Self::new()
    }
}
