/// Bitflags describing where candidate nodes for a field are searched,
/// relative to the node the behavior sits on. Flags combine with `|`;
/// a bare annotation means Self only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeMask(u8);

impl ScopeMask {
    pub const NONE: u8 = 0;
    pub const SELF: u8 = 1 << 0;
    pub const PARENT: u8 = 1 << 1;
    pub const CHILDREN: u8 = 1 << 2;
    pub const SIBLINGS: u8 = 1 << 3;
    pub const SCENE: u8 = 1 << 4;

    #[inline(always)]
    pub const fn new(flags: u8) -> Self {
        ScopeMask(flags)
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn includes_self(self) -> bool {
        self.0 & Self::SELF != 0
    }

    #[inline(always)]
    pub const fn includes_parent(self) -> bool {
        self.0 & Self::PARENT != 0
    }

    #[inline(always)]
    pub const fn includes_children(self) -> bool {
        self.0 & Self::CHILDREN != 0
    }

    #[inline(always)]
    pub const fn includes_siblings(self) -> bool {
        self.0 & Self::SIBLINGS != 0
    }

    #[inline(always)]
    pub const fn includes_scene(self) -> bool {
        self.0 & Self::SCENE != 0
    }
}

impl Default for ScopeMask {
    fn default() -> Self {
        ScopeMask::new(ScopeMask::SELF)
    }
}
