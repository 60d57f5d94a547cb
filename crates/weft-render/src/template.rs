//! Template assembly and the `html!` macro.

use crate::fragment::Fragment;

/// Ordered template builder behind the [`html!`] macro.
///
/// Alternates literal markup with interpolated values; `build` collapses
/// the parts into a single list fragment.
#[derive(Debug, Default)]
pub struct Template {
    parts: Vec<Fragment>,
}

impl Template {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal markup. Empty literals are dropped.
    pub fn text(mut self, markup: &str) -> Self {
        if !markup.is_empty() {
            self.parts.push(Fragment::text(markup));
        }
        self
    }

    /// Append an interpolated value.
    pub fn value(mut self, value: impl Into<Fragment>) -> Self {
        self.parts.push(value.into());
        self
    }

    /// Finish the template.
    pub fn build(self) -> Fragment {
        Fragment::List(self.parts)
    }
}

/// Build a [`Fragment`] from markup literals and parenthesized values.
///
/// Values are anything convertible into a fragment: strings, other
/// fragments, lists, options, or chunk streams.
///
/// # Example
///
/// ```rust,ignore
/// let title = "Socks";
/// let page = html! {
///     "<h1>" (title) "</h1>"
///     (html! { "<p>knitted</p>" })
/// };
/// ```
#[macro_export]
macro_rules! html {
    ($($tokens:tt)*) => {
        $crate::__html_template!($crate::Template::new(), $($tokens)*)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __html_template {
    ($template:expr $(,)?) => {
        $template.build()
    };
    ($template:expr, $markup:literal $($rest:tt)*) => {
        $crate::__html_template!($template.text($markup), $($rest)*)
    };
    ($template:expr, ($value:expr) $($rest:tt)*) => {
        $crate::__html_template!($template.value($value), $($rest)*)
    };
}
