//! `print(args...)`: write the arguments, tab-separated, as one line.

use crate::errors::CallResult;
use crate::{NativeCallable, Realm, Value};

/// Joins the display text of every argument with `\t` and writes the result
/// as one line through the realm's print handler. Never fails.
#[derive(Clone, Copy, Debug)]
pub struct Print;

impl NativeCallable for Print {
    fn invoke(&self, realm: &mut Realm, args: &[Value]) -> CallResult {
        let line = args
            .iter()
            .map(Value::display_value)
            .collect::<Vec<_>>()
            .join("\t");
        realm.print_handler().write_line(&line);
        Ok(())
    }
}
