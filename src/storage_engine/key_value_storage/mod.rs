mod cursor;
mod memory;
mod pair;
mod store;

pub use cursor::*;
pub use memory::*;
pub use pair::*;
pub use store::*;

#[cfg(test)]
mod key_value_storage_tests {
    use super::*;
    use crate::error::Result;
    use pretty_assertions::assert_eq;

    fn populated() -> Result<Memory> {
        let mut store = Memory::new();
        store.batch(vec![
            Operation::Put { key: b"a".to_vec(), value: vec![0x01] },
            Operation::Put { key: b"b".to_vec(), value: vec![0x02] },
            Operation::Put { key: b"c".to_vec(), value: vec![0x03] },
            Operation::Put { key: b"e".to_vec(), value: vec![0x05] },
        ])?;
        Ok(store)
    }

    #[test]
    fn get_set_delete() -> Result<()> {
        let mut store = Memory::new();
        assert_eq!(None, store.get(b"a")?);

        store.set(b"a", vec![0x01])?;
        assert_eq!(Some(vec![0x01]), store.get(b"a")?);

        store.set(b"a", vec![0x11])?;
        assert_eq!(Some(vec![0x11]), store.get(b"a")?);

        store.delete(b"a")?;
        assert_eq!(None, store.get(b"a")?);

        // Deleting a missing key is a no-op.
        store.delete(b"a")?;
        store.flush()?;
        Ok(())
    }

    #[test]
    fn batch_applies_in_order() -> Result<()> {
        let mut store = Memory::new();
        store.batch(vec![
            Operation::Put { key: b"a".to_vec(), value: vec![0x01] },
            Operation::Put { key: b"b".to_vec(), value: vec![0x02] },
            Operation::Delete { key: b"a".to_vec() },
        ])?;
        assert_eq!(None, store.get(b"a")?);
        assert_eq!(Some(vec![0x02]), store.get(b"b")?);
        Ok(())
    }

    #[test]
    fn cursor_seek_lands_on_equal_key() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        assert_eq!(Some(Pair::new(b"b".as_slice(), [0x02].as_slice())), cursor.seek(b"b")?);
        Ok(())
    }

    #[test]
    fn cursor_seek_skips_to_next_key() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        // "d" does not exist, the seek lands on the first key after it.
        assert_eq!(Some(Pair::new(b"e".as_slice(), [0x05].as_slice())), cursor.seek(b"d")?);
        Ok(())
    }

    #[test]
    fn cursor_seek_past_end() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        assert_eq!(None, cursor.seek(b"f")?);
        // The cursor is unpositioned, so steps go nowhere.
        assert_eq!(None, cursor.step(Direction::Forward)?);
        assert_eq!(None, cursor.step(Direction::Reverse)?);
        Ok(())
    }

    #[test]
    fn cursor_seek_first_and_last() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        assert_eq!(Some(Pair::new(b"a".as_slice(), [0x01].as_slice())), cursor.seek_first()?);
        assert_eq!(Some(Pair::new(b"e".as_slice(), [0x05].as_slice())), cursor.seek_last()?);
        Ok(())
    }

    #[test]
    fn cursor_steps_forward() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        cursor.seek_first()?;
        assert_eq!(Some(Pair::new(b"b".as_slice(), [0x02].as_slice())), cursor.step(Direction::Forward)?);
        assert_eq!(Some(Pair::new(b"c".as_slice(), [0x03].as_slice())), cursor.step(Direction::Forward)?);
        assert_eq!(Some(Pair::new(b"e".as_slice(), [0x05].as_slice())), cursor.step(Direction::Forward)?);
        assert_eq!(None, cursor.step(Direction::Forward)?);
        // Exhaustion is sticky in the traversal direction.
        assert_eq!(None, cursor.step(Direction::Forward)?);
        Ok(())
    }

    #[test]
    fn cursor_steps_backward() -> Result<()> {
        let store = populated()?;
        let mut cursor = store.cursor()?;
        cursor.seek_last()?;
        assert_eq!(Some(Pair::new(b"c".as_slice(), [0x03].as_slice())), cursor.step(Direction::Reverse)?);
        assert_eq!(Some(Pair::new(b"b".as_slice(), [0x02].as_slice())), cursor.step(Direction::Reverse)?);
        assert_eq!(Some(Pair::new(b"a".as_slice(), [0x01].as_slice())), cursor.step(Direction::Reverse)?);
        assert_eq!(None, cursor.step(Direction::Reverse)?);
        Ok(())
    }

    #[test]
    fn cursor_survives_concurrent_writes() -> Result<()> {
        let mut store = populated()?;
        let mut cursor = store.cursor()?;
        cursor.seek(b"b")?;
        // A key inserted ahead of the position is picked up by the next step.
        store.set(b"bb", vec![0x22])?;
        assert_eq!(Some(Pair::new(b"bb".as_slice(), [0x22].as_slice())), cursor.step(Direction::Forward)?);
        // Deleting the position key does not strand the cursor.
        store.delete(b"bb")?;
        assert_eq!(Some(Pair::new(b"c".as_slice(), [0x03].as_slice())), cursor.step(Direction::Forward)?);
        Ok(())
    }

    #[test]
    fn cursor_over_empty_store() -> Result<()> {
        let store = Memory::new();
        let mut cursor = store.cursor()?;
        assert_eq!(None, cursor.seek_first()?);
        assert_eq!(None, cursor.seek_last()?);
        assert_eq!(None, cursor.seek(b"a")?);
        assert_eq!(None, cursor.step(Direction::Forward)?);
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!("memory", Memory::new().to_string());
    }
}
