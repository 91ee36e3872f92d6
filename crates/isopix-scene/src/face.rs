/// The five cube faces the isometric view can ever show. The bottom face is
/// never visible and has no entry.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Front = 1,
    Left = 2,
    Right = 3,
    Back = 4,
}

impl Face {
    pub const ALL: [Face; 5] = [Face::Top, Face::Front, Face::Left, Face::Right, Face::Back];

    /// Returns the `[0..5)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.index()
    }
}

/// Small bit set of [`Face`] values.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const EMPTY: FaceSet = FaceSet(0);

    #[inline]
    pub fn contains(self, face: Face) -> bool {
        self.0 & face.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, face: Face) {
        self.0 |= face.bit();
    }

    #[inline]
    pub fn with(mut self, face: Face) -> FaceSet {
        self.insert(face);
        self
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}
