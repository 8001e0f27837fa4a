use log::Level;

pub const PAGE_TITLE: &str = "TFR - The First Rulers | Professional Esports Organization";

/// localStorage key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "tfr-theme";

/// Vertical offset past which the navbar switches to its compact style.
pub const COMPACT_NAV_THRESHOLD: f64 = 50.0;

/// How far above the bottom of the viewport an element must rise before it is revealed.
pub const REVEAL_OFFSET: f64 = 150.0;

/// Duration of the simulated contact form send.
pub const SEND_DELAY_MS: u32 = 2_000;

pub const TOAST_LIFETIME_MS: u32 = 5_000;
pub const TOAST_LIMIT: usize = 1;

pub const LOGO_URL: &str = "https://horizons-cdn.hostinger.com/5fa0b8d3-c44f-4dca-8d10-eedac9823804/7420bec5d227a6278d0ddf928ec2d3da.png";
pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1576990049702-8418081b420e";
pub const MEMBER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1595872018818-97555653a011";
pub const PRO_PLAYER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1602901248846-e655ca3f53ce";
pub const MEDIA_IMAGE_URL: &str = "https://images.unsplash.com/photo-1611798416123-c1255cff2c0e";

pub const INSTAGRAM_URL: &str = "https://instagram.com/the_first_rulers";
pub const DISCORD_URL: &str = "https://discord.gg/hn8ucWybPy";
pub const CONTACT_EMAIL: &str = "contact_tfr@gmail.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_send_takes_two_seconds() {
        assert_eq!(SEND_DELAY_MS, 2_000);
    }

    #[test]
    fn compact_threshold_and_reveal_offset() {
        assert_eq!(COMPACT_NAV_THRESHOLD, 50.0);
        assert_eq!(REVEAL_OFFSET, 150.0);
    }
}
