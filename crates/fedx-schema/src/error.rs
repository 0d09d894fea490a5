use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Collects validation messages by route (entity, then field or index) so a
/// single validation run reports every problem at once.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, ErrorTree>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, message: impl fmt::Display) {
        self.messages.push(message.to_string());
    }

    pub fn add_for(&mut self, route: impl Into<String>, message: impl fmt::Display) {
        self.children
            .entry(route.into())
            .or_default()
            .add(message);
    }

    /// Attach `other` under `route`, skipping it when it holds nothing.
    pub fn merge_for(&mut self, route: impl Into<String>, other: Self) {
        if other.is_empty() {
            return;
        }

        let child = self.children.entry(route.into()).or_default();
        child.merge(other);
    }

    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
        for (route, tree) in other.children {
            self.merge_for(route, tree);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Every message paired with its dotted route.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);

        out
    }

    fn flatten_into(&self, route: &str, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((route.to_string(), message.clone()));
        }
        for (key, child) in &self.children {
            let next = if route.is_empty() {
                key.clone()
            } else {
                format!("{route}.{key}")
            };
            child.flatten_into(&next, out);
        }
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (route, message)) in self.flatten().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if route.is_empty() {
                write!(f, "{message}")?;
            } else {
                write!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message onto an `ErrorTree`.
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        let errs = ErrorTree::new();

        assert!(errs.is_empty());
        assert!(errs.result().is_ok());
    }

    #[test]
    fn routes_are_dotted_and_sorted() {
        let mut field = ErrorTree::new();
        field.add("too long");

        let mut errs = ErrorTree::new();
        errs.add("top");
        errs.merge_for("Widget", {
            let mut t = ErrorTree::new();
            t.merge_for("name", field);
            t
        });
        errs.add_for("Gadget", "duplicate");

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.to_string(),
            "top\nGadget: duplicate\nWidget.name: too long"
        );
    }

    #[test]
    fn merging_empty_child_adds_nothing() {
        let mut errs = ErrorTree::new();
        errs.merge_for("Widget", ErrorTree::new());

        assert!(errs.result().is_ok());
    }
}
