use crate::errors::{BindingError, BindingResult, ScreenError, ScreenResult};
use schema::{Pokemon, PARTY_SIZE};
use std::ptr::NonNull;

/// Non-owning view of the host's party array.
///
/// The host keeps ownership of the records and guarantees they stay valid and
/// unaliased for as long as the screen is active. The slice is rebuilt from
/// the raw parts on every access so no Rust borrow outlives a single call.
#[derive(Debug)]
pub struct PartyHandle {
    ptr: NonNull<Pokemon>,
    len: usize,
}

// The host engine drives the screen from its single main loop; the handle is
// only moved between threads when stored behind the binding's mutex.
unsafe impl Send for PartyHandle {}

impl PartyHandle {
    /// Wrap `count` records starting at `ptr`.
    ///
    /// An empty party accepts any pointer, null included.
    ///
    /// # Safety
    /// When `count > 0`, `ptr` must point to `count` contiguous, initialised
    /// records that remain valid and are not accessed by anyone else until the
    /// screen is finished with them.
    pub unsafe fn from_raw(ptr: *mut Pokemon, count: u32) -> BindingResult<PartyHandle> {
        if count as usize > PARTY_SIZE {
            return Err(BindingError::PartyTooLarge {
                count,
                max: PARTY_SIZE,
            });
        }
        if count == 0 {
            return Ok(PartyHandle::empty());
        }
        let ptr = NonNull::new(ptr).ok_or(BindingError::NullParty { count })?;
        Ok(PartyHandle {
            ptr,
            len: count as usize,
        })
    }

    pub fn empty() -> PartyHandle {
        PartyHandle {
            ptr: NonNull::dangling(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The pointer the host passed in, null for an empty party.
    pub fn as_ptr(&self) -> *mut Pokemon {
        if self.len == 0 {
            std::ptr::null_mut()
        } else {
            self.ptr.as_ptr()
        }
    }

    pub fn members(&self) -> &[Pokemon] {
        // Validity for `len` records is the contract of `from_raw`; an empty
        // handle pairs a dangling pointer with length zero.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub fn members_mut(&mut self) -> &mut [Pokemon] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    pub fn get(&self, slot: usize) -> Option<&Pokemon> {
        self.members().get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> ScreenResult<&mut Pokemon> {
        let len = self.len;
        self.members_mut()
            .get_mut(slot)
            .ok_or(ScreenError::SlotOutOfRange { slot, len })
    }

    /// Exchange two records in the host's array.
    pub fn swap(&mut self, a: usize, b: usize) -> ScreenResult<()> {
        let len = self.len;
        for slot in [a, b] {
            if slot >= len {
                return Err(ScreenError::SlotOutOfRange { slot, len });
            }
        }
        self.members_mut().swap(a, b);
        Ok(())
    }
}
