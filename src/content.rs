//! Static page copy that is not part of the academy roster.

pub struct Pillar {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub struct ProPlayer {
    pub name: &'static str,
    pub role: &'static str,
    pub image_descriptor: &'static str,
    pub stats: &'static str,
}

pub const TAGLINE: &str = "One team, One spirit";

pub const ABOUT_INTRO: &str = "Founded in 2019 by a group of enthusiasts, The First Rulers (TFR) is a premier esports organization dedicated to excellence, innovation, and competitive spirit. We nurture talent, build champions, and create legends.";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        title: "Our Mission",
        description: "To develop world-class esports talent and compete at the highest level while maintaining integrity and sportsmanship.",
        icon: "🎯",
    },
    Pillar {
        title: "Our Values",
        description: "Excellence, teamwork, dedication, and respect. We believe in the power of unity and the strength of individual growth.",
        icon: "⭐",
    },
    Pillar {
        title: "Our Achievements",
        description: "Multiple championship titles, top-tier tournament placements, and a growing legacy of successful professional players.",
        icon: "🏆",
    },
];

pub const PRO_TEAM: &[ProPlayer] = &[
    ProPlayer {
        name: "Phoenix",
        role: "Star Player",
        image_descriptor: "Professional esports player in red jersey",
        stats: "MVP 2023 Championship",
    },
    ProPlayer {
        name: "Viper",
        role: "Team Captain",
        image_descriptor: "Esports team captain with trophy",
        stats: "5x Tournament Winner",
    },
    ProPlayer {
        name: "Sage",
        role: "Strategic Player",
        image_descriptor: "Professional gamer analyzing strategies",
        stats: "Highest Win Rate 2023",
    },
];

pub const MEDIA: &[&str] = &[
    "TFR team celebrating championship victory",
    "Intense gaming moment during tournament",
    "TFR academy players training session",
];

pub const ACADEMY_PERKS: &[&str] = &[
    "Professional coaching and training",
    "State-of-the-art gaming facilities",
    "Tournament opportunities",
    "Career development support",
];
