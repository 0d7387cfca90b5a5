//! Material and fluid select catalogs, mirroring the service's tables. The
//! tokens travel on the wire; the names are what the form shows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub token: &'static str,
    pub name: &'static str,
}

pub const MATERIALS: [CatalogEntry; 5] = [
    CatalogEntry { token: "stainless_304", name: "Stainless 304" },
    CatalogEntry { token: "aluminum_6061", name: "Aluminum 6061-T6" },
    CatalogEntry { token: "copper_c110", name: "Copper C110" },
    CatalogEntry { token: "brass_c360", name: "Brass C360" },
    CatalogEntry { token: "carbon_steel", name: "Carbon Steel" },
];

pub const FLUIDS: [CatalogEntry; 7] = [
    CatalogEntry { token: "air", name: "Air" },
    CatalogEntry { token: "water", name: "Water" },
    CatalogEntry { token: "diesel", name: "Diesel" },
    CatalogEntry { token: "oil_iso46", name: "Hydraulic Oil (ISO VG 46)" },
    CatalogEntry { token: "hydrogen", name: "Hydrogen" },
    CatalogEntry { token: "nitrogen", name: "Nitrogen" },
    CatalogEntry { token: "glycol", name: "Ethylene Glycol" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_unique() {
        for catalog in [&MATERIALS[..], &FLUIDS[..]] {
            for (i, a) in catalog.iter().enumerate() {
                for b in &catalog[i + 1..] {
                    assert_ne!(a.token, b.token, "duplicate token {}", a.token);
                }
            }
        }
    }

    #[test]
    fn test_service_defaults_present() {
        assert!(MATERIALS.iter().any(|m| m.token == "stainless_304"));
        assert!(FLUIDS.iter().any(|f| f.token == "air"));
    }
}
