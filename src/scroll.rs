/// Looks up the vertical document offset of an element by id.
pub trait AnchorResolver {
    fn offset_top(&self, id: &str) -> Option<f64>;
}

impl<F> AnchorResolver for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn offset_top(&self, id: &str) -> Option<f64> {
        self(id)
    }
}

/// What to do with a click on a link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Not an in-page link, let the browser navigate.
    Ignore,
    /// In-page link with no matching element. Default navigation is still
    /// suppressed but nothing scrolls.
    Suppress,
    /// Suppress default navigation and smooth scroll to this offset.
    ScrollTo(f64),
}

impl AnchorAction {
    pub fn prevents_default(self) -> bool {
        !matches!(self, AnchorAction::Ignore)
    }
}

/// Fragment of an in-page link, without the leading `#`.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

pub fn intercept<R: AnchorResolver + ?Sized>(href: Option<&str>, resolver: &R) -> AnchorAction {
    let Some(id) = href.and_then(fragment) else {
        return AnchorAction::Ignore;
    };
    // a bare "#" has no element to scroll to
    if id.is_empty() {
        return AnchorAction::Suppress;
    }
    match resolver.offset_top(id) {
        Some(top) => AnchorAction::ScrollTo(top),
        None => AnchorAction::Suppress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections(id: &str) -> Option<f64> {
        match id {
            "about" => Some(640.0),
            "resume" => Some(1480.0),
            "contact" => Some(2900.0),
            _ => None,
        }
    }

    #[test]
    fn test_scrolls_to_section_top() {
        assert_eq!(
            intercept(Some("#resume"), &sections),
            AnchorAction::ScrollTo(1480.0)
        );
        assert_eq!(
            intercept(Some("#about"), &sections),
            AnchorAction::ScrollTo(640.0)
        );
    }

    #[test]
    fn test_missing_target_suppresses_without_scroll() {
        let action = intercept(Some("#projects"), &sections);
        assert_eq!(action, AnchorAction::Suppress);
        assert!(action.prevents_default());
    }

    #[test]
    fn test_bare_hash() {
        let resolver = |id: &str| -> Option<f64> {
            assert!(!id.is_empty(), "empty id should not be resolved");
            None
        };
        assert_eq!(intercept(Some("#"), &resolver), AnchorAction::Suppress);
    }

    #[test]
    fn test_other_links_are_ignored() {
        for href in [
            "mailto:someone@example.com",
            "tel:09709143842",
            "https://example.com/#about",
            "/about",
        ] {
            let action = intercept(Some(href), &sections);
            assert_eq!(action, AnchorAction::Ignore, "{href}");
            assert!(!action.prevents_default());
        }
        assert_eq!(intercept(None, &sections), AnchorAction::Ignore);
    }

    #[test]
    fn test_fragment() {
        assert_eq!(fragment("#contact"), Some("contact"));
        assert_eq!(fragment("#"), Some(""));
        assert_eq!(fragment("contact"), None);
    }
}
