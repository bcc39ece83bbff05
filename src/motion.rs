use crate::state::CursorPosition;

/// Entrance animation for a block of the page. Until the page has mounted the
/// block sits at its starting pose; once loaded it transitions to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub offset_y: i32,
    pub scale: f32,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: &'static str,
}

impl Entrance {
    pub const AVATAR: Entrance = Entrance {
        offset_y: 0,
        scale: 0.9,
        duration_ms: 800,
        delay_ms: 0,
        // overshoots slightly, close to a spring
        easing: "cubic-bezier(0.34, 1.56, 0.64, 1)",
    };
    pub const HERO_TEXT: Entrance = Entrance::rise(30, 600, 200);
    pub const ABOUT: Entrance = Entrance::rise(20, 500, 400);
    pub const RESUME: Entrance = Entrance::rise(20, 500, 600);
    pub const CONTACT: Entrance = Entrance {
        easing: "ease-out",
        ..Entrance::rise(20, 600, 0)
    };

    pub const fn rise(offset_y: i32, duration_ms: u32, delay_ms: u32) -> Self {
        Entrance {
            offset_y,
            scale: 1.0,
            duration_ms,
            delay_ms,
            easing: "ease",
        }
    }

    /// Inline style for the block given the loaded flag.
    pub fn style(&self, is_loaded: bool) -> String {
        let transition = format!(
            "transition: opacity {d}ms {e} {w}ms, transform {d}ms {e} {w}ms",
            d = self.duration_ms,
            e = self.easing,
            w = self.delay_ms,
        );
        if is_loaded {
            format!("{transition}; opacity: 1; transform: none")
        } else {
            format!(
                "{transition}; opacity: 0; transform: translateY({}px) scale({})",
                self.offset_y, self.scale
            )
        }
    }
}

/// Delay before the `index`th item of a resume panel slides in.
pub fn stagger_delay_ms(index: usize) -> u32 {
    100 * (index as u32 + 1)
}

pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms", stagger_delay_ms(index))
}

/// Radial glow that follows the pointer. Hidden until the first move.
pub fn glow_style(cursor: Option<CursorPosition>, rgb: (u8, u8, u8)) -> String {
    let (r, g, b) = rgb;
    match cursor {
        Some(CursorPosition { x, y }) => format!(
            "background: radial-gradient(600px at {x}px {y}px, rgba({r}, {g}, {b}, 0.15), transparent 80%)"
        ),
        None => "background: none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entrance_gated_on_loaded() {
        let before = Entrance::HERO_TEXT.style(false);
        let after = Entrance::HERO_TEXT.style(true);
        assert!(before.contains("opacity: 0"));
        assert!(before.contains("translateY(30px)"));
        assert!(after.contains("opacity: 1"));
        assert!(after.contains("transform: none"));
        // same transition either way so the change animates
        assert!(before.starts_with("transition: opacity 600ms ease 200ms"));
        assert!(after.starts_with("transition: opacity 600ms ease 200ms"));
    }

    #[test]
    fn test_avatar_scales_in() {
        let before = Entrance::AVATAR.style(false);
        assert!(before.contains("scale(0.9)"));
        assert!(before.contains("800ms"));
    }

    #[test]
    fn test_section_delays_increase_down_the_page() {
        let delays = [
            Entrance::HERO_TEXT.delay_ms,
            Entrance::ABOUT.delay_ms,
            Entrance::RESUME.delay_ms,
        ];
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Entrance::CONTACT.easing, "ease-out");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger_delay_ms(0), 100);
        assert_eq!(stagger_delay_ms(3), 400);
        assert_eq!(stagger_style(1), "animation-delay: 200ms");
    }

    #[test]
    fn test_glow_follows_cursor() {
        assert_eq!(glow_style(None, (0, 0, 0)), "background: none");
        let style = glow_style(Some(CursorPosition { x: 10, y: -5 }), (52, 211, 153));
        assert!(style.contains("at 10px -5px"));
        assert!(style.contains("rgba(52, 211, 153, 0.15)"));
    }
}
