//! Reference table definitions.

/// The two reference tables served by the system.
///
/// Each variant carries the table-specific conventions: which record
/// fields hold the code and display text, how lookup codes are
/// normalized, and the message returned on a lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// CID-10 diagnosis classification codes.
    Cid10,
    /// SIGTAP billable procedure codes.
    Sigtap,
}

impl Table {
    /// Field holding a record's identity code.
    pub fn code_field(self) -> &'static str {
        match self {
            Table::Cid10 => "code",
            Table::Sigtap => "codigo",
        }
    }

    /// Field holding a record's human-readable text.
    pub fn text_field(self) -> &'static str {
        match self {
            Table::Cid10 => "description",
            Table::Sigtap => "nome",
        }
    }

    /// Normalizes a lookup code for exact comparison.
    ///
    /// CID-10 codes are stored uppercase, so input is case-folded up;
    /// SIGTAP codes are numeric strings compared as-is. Both sides trim
    /// surrounding whitespace.
    pub fn normalize_code(self, raw: &str) -> String {
        match self {
            Table::Cid10 => raw.trim().to_uppercase(),
            Table::Sigtap => raw.trim().to_string(),
        }
    }

    /// Message returned when an exact lookup misses.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Table::Cid10 => "Código CID não encontrado",
            Table::Sigtap => "Código SIGTAP não encontrado",
        }
    }

    /// Key under which this table's record count is reported.
    pub fn stat_key(self) -> &'static str {
        match self {
            Table::Cid10 => "cid10",
            Table::Sigtap => "sigtap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(Table::Cid10.code_field(), "code");
        assert_eq!(Table::Cid10.text_field(), "description");
        assert_eq!(Table::Sigtap.code_field(), "codigo");
        assert_eq!(Table::Sigtap.text_field(), "nome");
    }

    #[test]
    fn test_cid10_codes_fold_to_uppercase() {
        assert_eq!(Table::Cid10.normalize_code("a00"), "A00");
        assert_eq!(Table::Cid10.normalize_code("  z99.1 "), "Z99.1");
    }

    #[test]
    fn test_sigtap_codes_trim_only() {
        assert_eq!(Table::Sigtap.normalize_code(" 0301010015 "), "0301010015");
        // No case folding for procedure codes.
        assert_eq!(Table::Sigtap.normalize_code("abc"), "abc");
    }

    #[test]
    fn test_not_found_messages_are_distinct() {
        assert_eq!(Table::Cid10.not_found_message(), "Código CID não encontrado");
        assert_eq!(
            Table::Sigtap.not_found_message(),
            "Código SIGTAP não encontrado"
        );
    }
}
