use crate::data::{Persistable, RoomLayout};
use anyhow::Result;

pub fn run() -> Result<()> {
    let layout = RoomLayout::load()?;
    write_rooms(&layout, &mut std::io::stdout())
}

pub(crate) fn write_rooms<W: std::io::Write>(layout: &RoomLayout, out: &mut W) -> Result<()> {
    writeln!(out, "Room groups")?;
    writeln!(out, "---")?;
    for (i, group) in layout.groups.iter().enumerate() {
        writeln!(out, "  {}. {} ({} room(s))", i + 1, group.name, group.rooms.len())?;
        for room in &group.rooms {
            writeln!(out, "     - {}", room)?;
        }
    }
    writeln!(out, "---")?;
    writeln!(
        out,
        "Total: {} room(s) in {} group(s)",
        layout.room_count(),
        layout.groups.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RoomGroup;

    #[test]
    fn test_write_rooms_empty() {
        let layout = RoomLayout::default();
        let mut buf = Vec::new();
        write_rooms(&layout, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Total: 0 room(s) in 0 group(s)"));
    }

    #[test]
    fn test_write_rooms_lists_groups_in_order() {
        let layout = RoomLayout {
            groups: vec![
                RoomGroup {
                    name: "Main house".to_string(),
                    rooms: vec!["Room 1".to_string(), "Room 2".to_string()],
                },
                RoomGroup {
                    name: "Annex".to_string(),
                    rooms: vec!["Room 3".to_string()],
                },
            ],
        };
        let mut buf = Vec::new();
        write_rooms(&layout, &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("1. Main house (2 room(s))"));
        assert!(out.contains("2. Annex (1 room(s))"));
        assert!(out.contains("- Room 3"));
        assert!(out.contains("Total: 3 room(s) in 2 group(s)"));
        let main = out.find("Main house").unwrap();
        let annex = out.find("Annex").unwrap();
        assert!(main < annex);
    }
}
