//! Colour tokens for the two presentation modes.
//!
//! Each field is a Tailwind class list for one role on the page. Components
//! never branch on the dark-mode flag themselves; they ask for the palette and
//! read the token they need, so a variant of the page only has to swap these
//! two tables.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub accent_text: &'static str,
    pub link_hover: &'static str,
    pub toggle: &'static str,
    pub hero: &'static str,
    pub hero_kicker: &'static str,
    pub avatar_border: &'static str,
    pub primary_button: &'static str,
    pub wave: &'static str,
    pub heading: &'static str,
    pub rule: &'static str,
    pub card: &'static str,
    pub body_text: &'static str,
    pub muted_text: &'static str,
    pub tile: &'static str,
    pub tile_icon: &'static str,
    pub tab_active: &'static str,
    pub tab_idle: &'static str,
    pub timeline: &'static str,
    pub timeline_dot: &'static str,
    pub badge: &'static str,
    pub skill_card: &'static str,
    pub skill_icon: &'static str,
    pub contact_panel: &'static str,
    pub contact_icon: &'static str,
    pub meter_track: &'static str,
    pub meter_fill: &'static str,
    pub chip: &'static str,
    pub glow_rgb: (u8, u8, u8),
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        page: "bg-gray-50 text-gray-900",
        nav: "bg-white/90 backdrop-blur-lg",
        accent_text: "text-emerald-600",
        link_hover: "hover:text-emerald-600",
        toggle: "bg-gray-100 text-gray-800",
        hero: "bg-gradient-to-r from-emerald-600 to-emerald-400",
        hero_kicker: "text-emerald-100",
        avatar_border: "border-white",
        primary_button: "bg-white text-emerald-900 hover:bg-emerald-50",
        wave: "text-gray-50",
        heading: "text-gray-900",
        rule: "bg-emerald-600",
        card: "bg-white",
        body_text: "text-gray-700",
        muted_text: "text-gray-600",
        tile: "bg-gray-50 hover:bg-gray-100",
        tile_icon: "bg-emerald-100 text-emerald-600",
        tab_active: "bg-emerald-600 text-white",
        tab_idle: "text-gray-600 hover:bg-gray-100 hover:text-gray-800",
        timeline: "border-l-2 border-emerald-600",
        timeline_dot: "bg-emerald-600 ring-4 ring-white",
        badge: "bg-emerald-100 text-emerald-800",
        skill_card: "bg-gray-50",
        skill_icon: "text-emerald-700",
        contact_panel: "bg-emerald-600",
        contact_icon: "bg-emerald-500",
        meter_track: "bg-gray-200",
        meter_fill: "bg-emerald-600",
        chip: "bg-emerald-100 text-emerald-800",
        glow_rgb: (5, 150, 105),
    };

    pub const DARK: Palette = Palette {
        page: "bg-gray-900 text-gray-100",
        nav: "bg-gray-900/90 backdrop-blur-lg",
        accent_text: "text-emerald-400",
        link_hover: "hover:text-emerald-400",
        toggle: "bg-gray-800 text-yellow-400",
        hero: "bg-gradient-to-r from-emerald-900 to-emerald-700",
        hero_kicker: "text-emerald-300",
        avatar_border: "border-emerald-400",
        primary_button: "bg-emerald-400 text-gray-900 hover:bg-emerald-300",
        wave: "text-gray-900",
        heading: "text-white",
        rule: "bg-emerald-400",
        card: "bg-gray-800",
        body_text: "text-gray-300",
        muted_text: "text-gray-400",
        tile: "bg-gray-700 hover:bg-gray-600",
        tile_icon: "bg-emerald-400/20 text-emerald-400",
        tab_active: "bg-emerald-700 text-white",
        tab_idle: "text-gray-400 hover:bg-gray-800 hover:text-gray-200",
        timeline: "border-l-2 border-emerald-500",
        timeline_dot: "bg-emerald-500 ring-4 ring-gray-900",
        badge: "bg-emerald-500/20 text-emerald-400",
        skill_card: "bg-gray-800",
        skill_icon: "text-emerald-400",
        contact_panel: "bg-emerald-700",
        contact_icon: "bg-emerald-600",
        meter_track: "bg-gray-700",
        meter_fill: "bg-emerald-400",
        chip: "bg-emerald-900 text-emerald-300",
        glow_rgb: (52, 211, 153),
    };

    pub fn for_mode(is_dark_mode: bool) -> &'static Palette {
        if is_dark_mode {
            &Self::DARK
        } else {
            &Self::LIGHT
        }
    }

    pub fn tab(&self, is_active: bool) -> &'static str {
        if is_active {
            self.tab_active
        } else {
            self.tab_idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_flag() {
        assert_eq!(Palette::for_mode(false), &Palette::LIGHT);
        assert_eq!(Palette::for_mode(true), &Palette::DARK);
        assert!(Palette::for_mode(true).page.contains("bg-gray-900"));
    }

    #[test]
    fn test_tab_tokens() {
        let p = Palette::for_mode(false);
        assert_eq!(p.tab(true), p.tab_active);
        assert_eq!(p.tab(false), p.tab_idle);
        assert_ne!(Palette::DARK.tab(true), Palette::LIGHT.tab(true));
    }
}
