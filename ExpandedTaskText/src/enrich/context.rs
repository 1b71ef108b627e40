//! Inputs shared by every resolver

use super::diagnostics::Diagnostics;
use crate::database::{LocaleTable, QuestTable, TraderTable};
use crate::reference::ReferenceData;

/// Everything a description is built from, borrowed for the length of a pass
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentContext<'a> {
    /// Bundled reference tables and configuration
    pub reference: &'a ReferenceData,
    /// Host quest table, scanned for follow-up quests
    pub quests: &'a QuestTable,
    /// Host trader table, scanned for gunsmith part offers
    pub traders: &'a TraderTable,
    /// Strings of the server's desired locale
    pub locale: &'a LocaleTable,
}

impl<'a> EnrichmentContext<'a> {
    pub fn new(
        reference: &'a ReferenceData,
        quests: &'a QuestTable,
        traders: &'a TraderTable,
        locale: &'a LocaleTable,
    ) -> Self {
        Self {
            reference,
            quests,
            traders,
            locale,
        }
    }

    /// Resolve a locale key, recording a diagnostic and returning `""` on a miss
    pub fn lookup(&self, key: &str, diagnostics: &mut Diagnostics) -> &'a str {
        match self.locale.get(key) {
            Some(text) => text.as_str(),
            None => {
                diagnostics.missing_locale(key);
                ""
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::Diagnostic;

    #[test]
    fn test_lookup_records_misses() {
        let reference = ReferenceData::default();
        let quests = QuestTable::new();
        let traders = TraderTable::new();
        let mut locale = LocaleTable::new();
        locale.insert("k1 Name".to_string(), "Red Keycard".to_string());
        let ctx = EnrichmentContext::new(&reference, &quests, &traders, &locale);

        let mut diagnostics = Diagnostics::new();
        assert_eq!(ctx.lookup("k1 Name", &mut diagnostics), "Red Keycard");
        assert_eq!(ctx.lookup("k2 Name", &mut diagnostics), "");

        let recorded: Vec<_> = diagnostics.iter().cloned().collect();
        assert_eq!(
            recorded,
            vec![Diagnostic::MissingLocale {
                key: "k2 Name".to_string()
            }]
        );
    }
}
