/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Human-readable field listings for shapes.
//!
//! A shape renders as `{Name: value,Other: value}`: only set members appear, in declaration
//! order, under their modeled (PascalCase) names. Map members print with sorted keys so that a
//! given value always renders the same way.

use crate::auto_construct::AutoConstructList;
use crate::REDACTED;
use std::collections::HashMap;
use std::fmt;

/// How a member value is written inside a field listing.
pub trait DisplayValue {
    /// Writes the value to `f`.
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DisplayValue for str {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl DisplayValue for String {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl DisplayValue for bool {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl DisplayValue for i32 {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: DisplayValue + ?Sized> DisplayValue for &T {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(f)
    }
}

impl<T: DisplayValue> DisplayValue for [T] {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.fmt_value(f)?;
        }
        f.write_str("]")
    }
}

impl<T: DisplayValue> DisplayValue for Vec<T> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().fmt_value(f)
    }
}

impl<K: DisplayValue + Ord, V: DisplayValue, S> DisplayValue for HashMap<K, V, S> {
    fn fmt_value(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        f.write_str("{")?;
        for (idx, (key, value)) in entries.into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            key.fmt_value(f)?;
            f.write_str("=")?;
            value.fmt_value(f)?;
        }
        f.write_str("}")
    }
}

/// Writer for the `{Name: value,...}` listing of a shape.
///
/// Modeled on [`fmt::DebugStruct`]: call the member methods in declaration order, then
/// [`finish`](FieldList::finish).
///
/// ```
/// use smithy_types::FieldList;
/// use std::fmt;
///
/// struct Tagged {
///     name: Option<String>,
///     token: Option<String>,
///     format: Option<String>,
/// }
///
/// impl fmt::Display for Tagged {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         FieldList::new(f)
///             .field("Name", self.name.as_deref())
///             .sensitive("Token", self.token.as_deref())
///             .field("Format", self.format.as_deref())
///             .finish()
///     }
/// }
///
/// let value = Tagged { name: Some("x".into()), token: Some("secret".into()), format: None };
/// assert_eq!(value.to_string(), "{Name: x,Token: *** Sensitive Data Redacted ***}");
/// ```
#[must_use = "must eventually call `finish()` on field listings"]
pub struct FieldList<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> FieldList<'a, 'b> {
    /// Starts a listing, writing the opening brace.
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Writes `name: value` if `value` is set.
    pub fn field<T: DisplayValue + ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.entry(name, |f| value.fmt_value(f));
        }
        self
    }

    /// Writes `name: value` unless the list was never set.
    pub fn list<T: DisplayValue>(&mut self, name: &str, value: &AutoConstructList<T>) -> &mut Self {
        self.field(name, value.as_option())
    }

    /// Writes `name` with a redacted value if `value` is set.
    pub fn sensitive<T: ?Sized>(&mut self, name: &str, value: Option<&T>) -> &mut Self {
        if value.is_some() {
            self.entry(name, |f| f.write_str(REDACTED));
        }
        self
    }

    /// Writes the closing brace and returns the accumulated result.
    pub fn finish(&mut self) -> fmt::Result {
        self.result = self.result.and_then(|_| self.fmt.write_str("}"));
        self.result
    }

    fn entry(&mut self, name: &str, value: impl FnOnce(&mut fmt::Formatter<'b>) -> fmt::Result) {
        self.result = self.result.and_then(|_| {
            if self.has_fields {
                self.fmt.write_str(",")?;
            }
            self.fmt.write_str(name)?;
            self.fmt.write_str(": ")?;
            value(self.fmt)
        });
        self.has_fields = true;
    }
}

impl fmt::Debug for FieldList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldList")
            .field("has_fields", &self.has_fields)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{DisplayValue, FieldList};
    use crate::AutoConstructList;
    use std::collections::HashMap;
    use std::fmt;

    struct Render<F>(F);

    impl<F: Fn(&mut fmt::Formatter<'_>) -> fmt::Result> fmt::Display for Render<F> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            (self.0)(f)
        }
    }

    fn render(value: &dyn DisplayValue) -> String {
        Render(|f: &mut fmt::Formatter<'_>| value.fmt_value(f)).to_string()
    }

    #[test]
    fn empty_listing() {
        let out = Render(|f: &mut fmt::Formatter<'_>| FieldList::new(f).finish()).to_string();
        assert_eq!(out, "{}");
    }

    #[test]
    fn unset_members_are_skipped() {
        let unset: Option<&str> = None;
        let out = Render(|f: &mut fmt::Formatter<'_>| {
            FieldList::new(f)
                .field("A", unset)
                .field("B", Some("b"))
                .field("C", unset)
                .field("D", Some(&true))
                .finish()
        })
        .to_string();
        assert_eq!(out, "{B: b,D: true}");
    }

    #[test]
    fn auto_construct_lists_are_skipped() {
        let unset: AutoConstructList<String> = AutoConstructList::new();
        let emptied: AutoConstructList<String> = AutoConstructList::from(vec![]);
        let out = Render(|f: &mut fmt::Formatter<'_>| {
            FieldList::new(f)
                .list("Unset", &unset)
                .list("Emptied", &emptied)
                .finish()
        })
        .to_string();
        assert_eq!(out, "{Emptied: []}");
    }

    #[test]
    fn lists_and_maps() {
        assert_eq!(render(&vec!["a".to_string(), "b".to_string()]), "[a, b]");
        let mut map = HashMap::new();
        map.insert("zeta".to_string(), "1".to_string());
        map.insert("alpha".to_string(), "2".to_string());
        assert_eq!(render(&map), "{alpha=2, zeta=1}");
    }

    #[test]
    fn sensitive_unset_is_skipped() {
        let unset: Option<&str> = None;
        let out = Render(|f: &mut fmt::Formatter<'_>| {
            FieldList::new(f).sensitive("Token", unset).finish()
        })
        .to_string();
        assert_eq!(out, "{}");
    }
}
