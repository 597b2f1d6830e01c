/// Creates a single [`ConversationTurn`](crate::ConversationTurn) from a role shorthand.
///
/// ```rust
/// use parley::{Role, pl_turn};
///
/// let turn = pl_turn!(assistant => "Done.");
/// assert_eq!(turn.role, Role::Assistant);
/// assert_eq!(turn.text, "Done.");
/// ```
#[macro_export]
macro_rules! pl_turn {
    (user => $text:expr $(,)?) => {
        $crate::ConversationTurn::user($text)
    };
    (assistant => $text:expr $(,)?) => {
        $crate::ConversationTurn::assistant($text)
    };
    ($role:ident => $text:expr $(,)?) => {
        compile_error!("unsupported role: use user or assistant");
    };
}

/// Creates a `Vec<ConversationTurn>` history from role/text pairs.
///
/// ```rust
/// use parley::{Role, pl_history};
///
/// let history = pl_history![
///     user => "hi",
///     assistant => "Hello! How can I help?",
/// ];
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[1].role, Role::Assistant);
/// ```
#[macro_export]
macro_rules! pl_history {
    () => {
        Vec::<$crate::ConversationTurn>::new()
    };
    ($($role:ident => $text:expr),+ $(,)?) => {
        vec![$($crate::pl_turn!($role => $text)),+]
    };
}
