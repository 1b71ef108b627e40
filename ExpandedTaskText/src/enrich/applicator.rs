//! Writing enriched descriptions into the host locale tables

use crate::database::{GlobalLocales, quest_description_key};

/// Register a transformer on every language that sets the quest's description
///
/// The same text goes to every language; generated text is never translated.
/// Returns the number of locales updated.
pub fn apply_description(locales: &mut GlobalLocales, quest_id: &str, description: &str) -> usize {
    let key = quest_description_key(quest_id);

    for locale in locales.values_mut() {
        let key = key.clone();
        let description = description.to_string();
        locale.add_transformer(move |table| {
            table.insert(key.clone(), description.clone());
        });
    }

    locales.len()
}
