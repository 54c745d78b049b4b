use erbeds_domain::region::{REGIONS, RegionEntry};
use std::borrow::Cow;

/// Lookup failures against the region table.
#[erbeds_derive::erbeds_error]
pub enum CatalogError {
    /// The top-level region is not in the table.
    #[error("Unknown region{}: {region}", format_context(.context))]
    UnknownRegion { region: String, context: Option<Cow<'static, str>> },

    /// The district is not listed under the given region.
    #[error("Unknown district{}: {district} is not part of {region}", format_context(.context))]
    UnknownSubRegion { region: String, district: String, context: Option<Cow<'static, str>> },
}

/// Read-only view over the static region table.
#[derive(Debug, Clone, Copy)]
pub struct RegionCatalog {
    entries: &'static [RegionEntry],
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RegionCatalog {
    /// The catalog compiled into the client.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: REGIONS }
    }

    /// Top-level region names in display order.
    #[must_use]
    pub fn top_level_regions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.name).collect()
    }

    /// Districts of `region` in display order.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRegion`] if the region is not in the table.
    pub fn sub_regions(&self, region: &str) -> Result<&'static [&'static str], CatalogError> {
        self.entry(region)
            .map(|entry| entry.districts)
            .ok_or_else(|| CatalogError::UnknownRegion { region: region.to_owned(), context: None })
    }

    #[must_use]
    pub fn contains(&self, region: &str, district: &str) -> bool {
        self.entry(region).is_some_and(|entry| entry.districts.iter().any(|d| *d == district))
    }

    /// Resolves both names to their `'static` table entries.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRegion`] or [`CatalogError::UnknownSubRegion`].
    pub fn resolve(
        &self,
        region: &str,
        district: &str,
    ) -> Result<(&'static str, &'static str), CatalogError> {
        let entry = self
            .entry(region)
            .ok_or_else(|| CatalogError::UnknownRegion { region: region.to_owned(), context: None })?;
        let district = entry.districts.iter().copied().find(|d| *d == district).ok_or_else(|| {
            CatalogError::UnknownSubRegion {
                region: entry.name.to_owned(),
                district: district.to_owned(),
                context: None,
            }
        })?;
        Ok((entry.name, district))
    }

    fn entry(&self, region: &str) -> Option<&'static RegionEntry> {
        let entries: &'static [RegionEntry] = self.entries;
        entries.iter().find(|entry| entry.name == region)
    }
}
