//! Static region table.
//!
//! Top-level regions (시도) in display order, each with its districts (시군구) in display
//! order. Every entry has at least one district.

/// One top-level region and its districts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    pub name: &'static str,
    pub districts: &'static [&'static str],
}

pub const SEOUL: &str = "서울특별시";
pub const GWANGJU: &str = "광주광역시";

pub static REGIONS: &[RegionEntry] = &[
    RegionEntry { name: SEOUL, districts: &["종로구", "강남구", "서초구", "중구"] },
    RegionEntry { name: GWANGJU, districts: &["서구", "북구", "남구", "동구", "광산구"] },
];

/// Region selected when the client starts.
pub const DEFAULT_REGION: &str = GWANGJU;
/// District selected together with [`DEFAULT_REGION`].
pub const DEFAULT_DISTRICT: &str = "서구";
