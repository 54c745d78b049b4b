use crate::catalog::{CatalogError, RegionCatalog};
use erbeds_domain::region::{DEFAULT_DISTRICT, DEFAULT_REGION};
use tracing::debug;

/// A region/district pair that is always present in the catalog.
///
/// The fields point into the static region table, so a `Selection` can only be obtained from
/// [`RegionCatalog::resolve`] or [`Selection::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    region: &'static str,
    district: &'static str,
}

impl Default for Selection {
    fn default() -> Self {
        Self { region: DEFAULT_REGION, district: DEFAULT_DISTRICT }
    }
}

impl Selection {
    /// # Errors
    /// Returns a [`CatalogError`] if the pair is not in `catalog`.
    pub fn new(catalog: &RegionCatalog, region: &str, district: &str) -> Result<Self, CatalogError> {
        let (region, district) = catalog.resolve(region, district)?;
        Ok(Self { region, district })
    }

    /// Top-level region, sent upstream as `STAGE1`.
    #[must_use]
    pub const fn region(&self) -> &'static str {
        self.region
    }

    /// District, sent upstream as `STAGE2`.
    #[must_use]
    pub const fn district(&self) -> &'static str {
        self.district
    }
}

/// The two cascading selectors.
///
/// Changing the region resets the district to the region's first entry. A district that does
/// not belong to the current region is rejected and leaves the selection untouched.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    catalog: RegionCatalog,
    current: Selection,
}

impl SelectionState {
    /// Starts on the catalog's default region, or its first region if that one is missing.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRegion`] if the catalog has no usable region at all.
    pub fn new(catalog: RegionCatalog) -> Result<Self, CatalogError> {
        let current = match Selection::new(&catalog, DEFAULT_REGION, DEFAULT_DISTRICT) {
            Ok(selection) => selection,
            Err(_) => {
                let region = catalog.top_level_regions().first().copied().unwrap_or_default();
                first_district(&catalog, region)?
            },
        };
        Ok(Self { catalog, current })
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.current
    }

    #[must_use]
    pub const fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    /// Districts offered for the current region.
    #[must_use]
    pub fn sub_regions(&self) -> &'static [&'static str] {
        self.catalog.sub_regions(self.current.region).unwrap_or_default()
    }

    /// Switches the region and resets the district to its first entry.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownRegion`]; the selection is left unchanged.
    pub fn set_top_level_region(&mut self, name: &str) -> Result<(), CatalogError> {
        self.current = first_district(&self.catalog, name)?;
        debug!(region = self.current.region, district = self.current.district, "Region changed");
        Ok(())
    }

    /// Switches the district within the current region.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownSubRegion`]; the selection is left unchanged.
    pub fn set_sub_region(&mut self, name: &str) -> Result<(), CatalogError> {
        self.current = Selection::new(&self.catalog, self.current.region, name)?;
        debug!(district = self.current.district, "District changed");
        Ok(())
    }
}

fn first_district(catalog: &RegionCatalog, region: &str) -> Result<Selection, CatalogError> {
    let districts = catalog.sub_regions(region)?;
    let district = districts.first().copied().unwrap_or_default();
    Selection::new(catalog, region, district)
}
