pub mod clock;
pub mod config;
pub mod journal;
pub mod note;
pub mod task;
pub mod timer;

use std::rc::Rc;

use focusboard_core::{Config, Database, ListItem};

/// Open the record store named in the config.
pub fn open_store(config: &Config) -> Result<Rc<Database>, Box<dyn std::error::Error>> {
    Ok(Rc::new(Database::open(&config.storage.database_file)?))
}

/// Find an item by full id or unique id prefix.
pub fn resolve_id<'a, P>(
    items: impl Iterator<Item = &'a ListItem<P>>,
    needle: &str,
) -> Result<String, Box<dyn std::error::Error>>
where
    P: 'a,
{
    let mut matches = Vec::new();
    for item in items {
        if item.id == needle {
            return Ok(item.id.clone());
        }
        if item.id.starts_with(needle) {
            matches.push(item.id.clone());
        }
    }
    match matches.len() {
        0 => Err(format!("no item matches '{needle}'").into()),
        1 => Ok(matches.remove(0)),
        n => Err(format!("'{needle}' is ambiguous ({n} matches)").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_id_by_prefix() {
        let items = vec![
            ListItem::new("abc123", ()),
            ListItem::new("abd456", ()),
            ListItem::new("x", ()),
        ];
        assert_eq!(resolve_id(items.iter(), "abc").unwrap(), "abc123");
        assert_eq!(resolve_id(items.iter(), "x").unwrap(), "x");
        assert!(resolve_id(items.iter(), "ab").is_err());
        assert!(resolve_id(items.iter(), "zz").is_err());
    }
}
