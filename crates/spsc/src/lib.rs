#![cfg_attr(not(test), no_std)]

pub mod fifo;


pub use self::fifo::{
    make_slots,
    Consumer,
    Producer,
    Slot,
    SpscFifo,
};

/// A queue of raw bytes, the instantiation used for single-producer
/// single-consumer byte-stream buffering.
pub type ByteFifo<'buf> = SpscFifo<'buf, u8>;
