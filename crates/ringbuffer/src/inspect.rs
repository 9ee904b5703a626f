//! Non-consuming views of the live bytes, for tests and diagnostics.

use core::fmt;
use core::iter::FusedIterator;

use crate::ring::{advance, RingBuffer};

/// Iterator over live bytes from tail (oldest) to head (newest).
///
/// Created by [`RingBuffer::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'r> {
    storage: &'r [u8],
    pos: usize,
    mask: usize,
    remaining: usize,
}

impl<'r> Iter<'r> {
    pub(crate) fn new(storage: &'r [u8], read: usize, mask: usize, len: usize) -> Self {
        Self {
            storage,
            pos: read,
            mask,
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.storage.get(self.pos).copied()?;
        self.pos = advance(self.pos, self.mask);
        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// `Display` adapter printing the tail/head indices and every live slot.
///
/// Created by [`RingBuffer::dump`]. Output for a 16-byte buffer holding
/// `[2, 3, 4]`:
///
/// ```text
/// ************
/// ****tail= 2, head= 5****
/// index= 2, data=0x2
/// index= 3, data=0x3
/// index= 4, data=0x4
/// ************
/// ```
pub struct Dump<'r> {
    read: usize,
    write: usize,
    mask: usize,
    live: Iter<'r>,
}

impl<'r> Dump<'r> {
    pub(crate) fn new(ring: &'r RingBuffer<'_>) -> Self {
        Self {
            read: ring.read_index(),
            write: ring.write_index(),
            mask: ring.mask(),
            live: ring.iter(),
        }
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "************")?;
        writeln!(f, "****tail={:2}, head={:2}****", self.read, self.write)?;
        let mut index = self.read;
        for value in self.live.clone() {
            writeln!(f, "index={index:2}, data={value:#x}")?;
            index = advance(index, self.mask);
        }
        writeln!(f, "************")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_exact_size() {
        let mut storage = [0u8; 8];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[1, 2, 3]);
        let mut it = ring.iter();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_iter_wraps_around_storage_end() {
        let mut storage = [0u8; 4];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[1, 2, 3, 4, 5]);
        assert_eq!(ring.iter().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_iter_does_not_consume() {
        let mut storage = [0u8; 4];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[9, 8]);
        let _ = ring.iter().count();
        assert_eq!(ring.len(), 2);
        assert_eq!((&ring).into_iter().collect::<Vec<_>>(), vec![9, 8]);
    }

    #[test]
    fn test_dump_empty() {
        let mut storage = [0u8; 16];
        let ring = RingBuffer::new(&mut storage).expect("valid");
        assert_eq!(
            ring.dump().to_string(),
            "************\n****tail= 0, head= 0****\n************\n"
        );
    }

    #[test]
    fn test_dump_lists_live_slots_with_indices() {
        let mut storage = [0u8; 16];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[0, 1, 2, 3, 4]);
        let _ = ring.get();
        let _ = ring.get();
        assert_eq!(
            ring.dump().to_string(),
            "************\n\
             ****tail= 2, head= 5****\n\
             index= 2, data=0x2\n\
             index= 3, data=0x3\n\
             index= 4, data=0x4\n\
             ************\n"
        );
    }

    #[test]
    fn test_dump_walks_every_slot_of_two_byte_ring() {
        let mut storage = [0u8; 2];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[0x7, 0x8, 0x9]);
        assert_eq!(
            ring.dump().to_string(),
            "************\n****tail= 0, head= 1****\nindex= 0, data=0x9\n************\n"
        );
    }

    #[test]
    fn test_dump_index_wraps() {
        let mut storage = [0u8; 4];
        let mut ring = RingBuffer::new(&mut storage).expect("valid");
        let _ = ring.put_many(&[0xA, 0xB, 0xC, 0xD, 0xE]);
        let text = ring.dump().to_string();
        assert!(text.contains("****tail= 2, head= 1****"));
        assert!(text.contains("index= 3, data=0xd\nindex= 0, data=0xe\n"));
    }
}
