use std::ops::Mul;

use crate::math::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Axis-aligned pixel rectangle in absolute screen coordinates.
pub type IRect = Rect<i32>;

impl Rect<i32> {
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Rect::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Shrink by `amount` on every side. Width and height never go negative.
    pub fn inset(&self, amount: i32) -> Self {
        Rect::new(
            self.x + amount,
            self.y + amount,
            (self.width - 2 * amount).max(0),
            (self.height - 2 * amount).max(0),
        )
    }

    /// Grow by `amount` on every side.
    pub fn outset(&self, amount: i32) -> Self {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    /// Clamp to a drawable surface of `surface` size anchored at the origin.
    ///
    /// The result never has a negative origin and never extends past the
    /// surface; a rectangle entirely off-surface collapses to zero size.
    pub fn clamp_to_surface(&self, surface: IVec2) -> Self {
        let left = self.x.clamp(0, surface.x.max(0));
        let top = self.y.clamp(0, surface.y.max(0));
        let right = self.right().clamp(left, surface.x.max(left));
        let bottom = self.bottom().clamp(top, surface.y.max(top));
        Rect::new(left, top, right - left, bottom - top)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<i32> {
    pub fn to_ivec2(self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}
