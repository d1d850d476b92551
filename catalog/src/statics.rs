use models::LocalizedString;

/// Filter option value meaning "no constraint".
pub const ALL_FILTER_OPTION: &str = "All";

lazy_static::lazy_static! {
    pub static ref GAME_TITLE: LocalizedString = LocalizedString::new("Duet Night Abyss", "Duet Night Abyss");
    pub static ref SECTION_INFORMATION: LocalizedString = LocalizedString::new("Information", "Thông tin");
    pub static ref SECTION_DESCRIPTION: LocalizedString = LocalizedString::new("Description", "Mô tả");
    pub static ref SECTION_ABILITIES: LocalizedString = LocalizedString::new("Abilities", "Khả năng");
    pub static ref SECTION_BUILD: LocalizedString = LocalizedString::new("Build Guide", "Hướng dẫn Build");
    pub static ref SECTION_SYNERGY: LocalizedString = LocalizedString::new("Team Synergy", "Hiệu Ứng Đội");
    pub static ref SECTION_PROS_CONS: LocalizedString = LocalizedString::new("Pros & Cons", "Ưu & Nhược Điểm");
}
