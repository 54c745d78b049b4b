use erbeds::domain::labels::{BEDS_LABEL, NO_RESULTS, NOT_REPORTED, PHONE_LABEL, beds_text};
use erbeds::kernel::prelude::{HospitalRecord, RegionCatalog, Selection};
use std::io::{self, Write};

/// Writes one line per hospital: status, name, bed count, phone.
pub fn write_results(
    out: &mut impl Write,
    selection: Selection,
    records: &[HospitalRecord],
) -> io::Result<()> {
    writeln!(out, "{} {}", selection.region(), selection.district())?;
    if records.is_empty() {
        return writeln!(out, "{NO_RESULTS}");
    }

    for record in records {
        writeln!(
            out,
            "[{:<6}] {}  {BEDS_LABEL} {}  {PHONE_LABEL} {}",
            record.status(),
            record.name,
            beds_text(record.available_beds),
            record.phone.as_deref().unwrap_or(NOT_REPORTED),
        )?;
    }
    Ok(())
}

pub fn write_regions(out: &mut impl Write, catalog: &RegionCatalog) -> io::Result<()> {
    for region in catalog.top_level_regions() {
        let districts = catalog.sub_regions(region).unwrap_or_default();
        writeln!(out, "{region}: {}", districts.join(", "))?;
    }
    Ok(())
}
