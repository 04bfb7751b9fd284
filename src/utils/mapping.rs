/// A page file whose single video source gets replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingEntry {
    /// Path relative to the project root
    pub file: &'static str,
    /// Regex matching the existing `<source .../>` tag
    pub pattern: &'static str,
    /// File name of the re-encoded video under the responsive directories
    pub asset: &'static str,
}

/// Pages to rewrite, in processing order.
pub const VIDEO_UPDATES: &[MappingEntry] = &[
    MappingEntry {
        file: "pages/DoubleWide.tsx",
        pattern: r#"<source src="/assets/video/videosworking/doublewide-hero\.mp4" type="video/mp4" />"#,
        asset: "doublewide-hero.mp4",
    },
    MappingEntry {
        file: "pages/SingleWide.tsx",
        pattern: r#"<source src="/assets/video/videosworking/singewidehomepage\.mp4" type="video/mp4" />"#,
        asset: "singewidehomepage.mp4",
    },
    MappingEntry {
        file: "pages/Modular.tsx",
        pattern: r#"<source src="/assets/video/videosworking/modularhomes\.mp4" type="video/mp4" />"#,
        asset: "modularhomes.mp4",
    },
    // Contact shares the land footage
    MappingEntry {
        file: "pages/Contact.tsx",
        pattern: r#"<source src="/assets/images/awards/contact\.mp4" type="video/mp4" />"#,
        asset: "land.mp4",
    },
    MappingEntry {
        file: "pages/LandHome.tsx",
        pattern: r#"<source src="/assets/video/videosworking/land\.mp4" type="video/mp4" />"#,
        asset: "land.mp4",
    },
    MappingEntry {
        file: "pages/Catalog.tsx",
        pattern: r#"<source src="/assets/video/videosworking/hero\.mp4" type="video/mp4" />"#,
        asset: "hero.mp4",
    },
    MappingEntry {
        file: "pages/About.tsx",
        pattern: r#"<source src="/assets/images/awards/about page\.mp4" type="video/mp4" />"#,
        asset: "1204.mp4",
    },
    MappingEntry {
        file: "pages/Manufacturers.tsx",
        pattern: r#"<source src="/assets/images/awards/manufactures\.mp4" type="video/mp4" />"#,
        asset: "manufactures.mp4",
    },
    MappingEntry {
        file: "pages/Insurance.tsx",
        pattern: r#"<source src="/assets/video/videosworking/finance\.mp4" type="video/mp4" />"#,
        asset: "finance.mp4",
    },
    MappingEntry {
        file: "pages/Deals.tsx",
        pattern: r#"<source src="/assets/video/videosworking/deal\.mp4" type="video/mp4" />"#,
        asset: "deal.mp4",
    },
];
