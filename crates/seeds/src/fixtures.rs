//! The fixed hero roster.

use std::collections::HashSet;

use heroes::Hero;

/// Returns the roster written by the seed, ordered by id.
pub fn heroes() -> Vec<Hero> {
    vec![
        Hero::new(1, "Clark", "Kent", "Superman"),
        Hero::new(2, "Bruce", "Wayne", "Batman"),
        Hero::new(3, "Peter", "Parker", "Spiderman"),
        Hero::new(4, "Susan", "Storm-Richards", "Invisible Woman"),
    ]
}

/// Checks that ids and hero names are unique across the roster.
///
/// Returns a description of the first violation found.
pub fn validate(roster: &[Hero]) -> Result<(), String> {
    let mut ids = HashSet::with_capacity(roster.len());
    let mut names = HashSet::with_capacity(roster.len());

    for hero in roster {
        if !ids.insert(hero.id) {
            return Err(format!("duplicate id {}", hero.id));
        }
        if !names.insert(hero.hero_name.as_str()) {
            return Err(format!("duplicate hero name `{}`", hero.hero_name));
        }
    }

    Ok(())
}
