mod read;
mod write;

/// Who is reading. Only the CPU is subject to PPU access blocking, and only
/// peeks must be free of noise.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum Access {
    Cpu,
    Dma,
    Peek,
}
