//! Structural walker over `.ff` character containers
//!
//! The walker drives a cursor through the four ordered regions of a
//! container - header, palette table, stats block, sprite table - and
//! records how many bytes the records span. Sprite records have variable,
//! data-dependent lengths, so the sprite table can only be measured by
//! walking it record by record.
//!
//! The walker trusts the format. Beyond bounds checks there is no
//! validation: an in-bounds record with nonsense counts walks to a wrong
//! but unflagged length.

use std::fmt;

use super::cursor::FfCursor;
use super::{
    BOX_ENTRY_SIZE, COLOR_ENTRY_SIZE, COPIED_FRAME_THRESHOLD, FfLayout, HEADER_SIZE, SpriteKind,
    SpriteRecord, STATS_BLOCK_SIZE,
};
use crate::error::Result;

/// One phase of the structural walk.
///
/// Phases advance strictly left to right; no phase is revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Leading two-byte header.
    Header,
    /// Palette table: two counts plus the color region they imply.
    Palettes,
    /// Fixed-size character stats block.
    Stats,
    /// Counted sprite table with variable-length records.
    Sprites,
    /// Walk complete; the cursor position is the structural length.
    Done,
}

impl Stage {
    /// The stage that follows this one. `Done` is terminal.
    fn next(self) -> Stage {
        match self {
            Stage::Header => Stage::Palettes,
            Stage::Palettes => Stage::Stats,
            Stage::Stats => Stage::Sprites,
            Stage::Sprites | Stage::Done => Stage::Done,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Header => "header",
            Stage::Palettes => "palettes",
            Stage::Stats => "stats",
            Stage::Sprites => "sprites",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Field gated by one copy flag of a copied frame.
#[derive(Debug, Clone, Copy)]
enum CopyField {
    /// Frame duration, one u16.
    FrameLength,
    /// Sprite-sheet region, four u16 coordinates.
    SheetRegion,
    /// Draw offsets, two u16 values.
    DrawOffsets,
    /// A counted group of collision boxes.
    BoxGroup,
}

/// Copy-flag fields in evaluation order, most significant bit first.
///
/// A set flag means the field is copied from the source frame and absent
/// here; a clear flag means the field is present inline. The five box
/// groups are hurtboxes, grab boxes, collision boxes, proximity-guard
/// boxes, and hitboxes; they all carry the same wire shape.
const COPY_FIELDS: [CopyField; 8] = [
    CopyField::FrameLength,
    CopyField::SheetRegion,
    CopyField::DrawOffsets,
    CopyField::BoxGroup, // hurtboxes
    CopyField::BoxGroup, // grab and command-grab boxes
    CopyField::BoxGroup, // throw, push, and ground-collision boxes
    CopyField::BoxGroup, // proximity-guard boxes
    CopyField::BoxGroup, // hitboxes
];

/// Structural walker over a borrowed container buffer.
///
/// One walker performs one walk; the buffer is never mutated.
pub struct FfWalker<'a> {
    cursor: FfCursor<'a>,
    stage: Stage,
    layout: FfLayout,
}

impl<'a> FfWalker<'a> {
    /// Create a walker positioned at the start of the container.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: FfCursor::new(data),
            stage: Stage::Header,
            layout: FfLayout {
                palette_count: 0,
                color_count: 0,
                sprite_count: 0,
                sprites: Vec::new(),
                structural_len: 0,
            },
        }
    }

    /// Run every remaining stage and report the recorded layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TruncatedInput`] if any record runs past the end of
    /// the buffer. The walk has no partial results; it either completes all
    /// stages or fails.
    ///
    /// [`Error::TruncatedInput`]: crate::Error::TruncatedInput
    pub fn walk(mut self) -> Result<FfLayout> {
        while self.stage != Stage::Done {
            self.step()?;
        }
        self.layout.structural_len = self.cursor.position();
        tracing::debug!(
            "walked {} sprite(s), structural length {} bytes",
            self.layout.sprite_count,
            self.layout.structural_len
        );
        Ok(self.layout)
    }

    /// Consume the current stage's records, then advance to the next stage.
    fn step(&mut self) -> Result<()> {
        match self.stage {
            Stage::Header => self.cursor.skip(HEADER_SIZE, self.stage, "header")?,
            Stage::Palettes => self.walk_palettes()?,
            Stage::Stats => self
                .cursor
                .skip(STATS_BLOCK_SIZE, self.stage, "stats block")?,
            Stage::Sprites => self.walk_sprites()?,
            Stage::Done => {}
        }
        self.stage = self.stage.next();
        Ok(())
    }

    fn walk_palettes(&mut self) -> Result<()> {
        let palette_count = self.cursor.read_u16_be(self.stage, "palette count")?;
        let color_count = self.cursor.read_u16_be(self.stage, "color count")?;
        let region = COLOR_ENTRY_SIZE * usize::from(color_count) * usize::from(palette_count);
        self.cursor.skip(region, self.stage, "palette colors")?;

        tracing::debug!("{palette_count} palette(s) of {color_count} color(s)");
        self.layout.palette_count = palette_count;
        self.layout.color_count = color_count;
        Ok(())
    }

    fn walk_sprites(&mut self) -> Result<()> {
        let sprite_count = self.cursor.read_u16_be(self.stage, "sprite count")?;
        self.layout.sprite_count = sprite_count;
        self.layout.sprites.reserve(usize::from(sprite_count));

        for _ in 0..sprite_count {
            let offset = self.cursor.position();
            let kind = self.walk_sprite()?;
            self.layout.sprites.push(SpriteRecord {
                offset,
                len: self.cursor.position() - offset,
                kind,
            });
        }
        Ok(())
    }

    fn walk_sprite(&mut self) -> Result<SpriteKind> {
        let sprite_length = self.cursor.read_u16_be(self.stage, "sprite length")?;
        if sprite_length > COPIED_FRAME_THRESHOLD {
            // The low byte of an over-threshold length doubles as the
            // copy-flag set.
            self.walk_copied_frame(sprite_length as u8)?;
            Ok(SpriteKind::Copied)
        } else {
            self.walk_box_list_frame()?;
            Ok(SpriteKind::BoxList)
        }
    }

    /// Frame defined by reference to another frame.
    ///
    /// After the source-frame reference, each clear copy flag contributes
    /// one inline field. All eight flags are evaluated independently and in
    /// order; there is no early exit.
    fn walk_copied_frame(&mut self, copy_flags: u8) -> Result<()> {
        self.cursor.skip(4, self.stage, "source frame reference")?;

        for (bit, field) in COPY_FIELDS.iter().enumerate() {
            if copy_flags & (0x80 >> bit) != 0 {
                continue;
            }
            match field {
                CopyField::FrameLength => self.cursor.skip(2, self.stage, "frame length")?,
                CopyField::SheetRegion => self.cursor.skip(8, self.stage, "sheet region")?,
                CopyField::DrawOffsets => self.cursor.skip(4, self.stage, "draw offsets")?,
                CopyField::BoxGroup => self.walk_box_group()?,
            }
        }
        Ok(())
    }

    /// Full frame: fixed fields, then box groups until a zero tag.
    fn walk_box_list_frame(&mut self) -> Result<()> {
        self.cursor.skip(12, self.stage, "frame fields")?;

        let mut group_tag = self.cursor.read_u16_be(self.stage, "box group tag")?;
        while group_tag != 0 {
            self.walk_box_group()?;
            group_tag = self.cursor.read_u16_be(self.stage, "box group tag")?;
        }
        Ok(())
    }

    fn walk_box_group(&mut self) -> Result<()> {
        let box_count = self.cursor.read_u16_be(self.stage, "box count")?;
        self.cursor.skip(
            usize::from(box_count) * BOX_ENTRY_SIZE,
            self.stage,
            "box entries",
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_progression_is_linear() {
        assert_eq!(Stage::Header.next(), Stage::Palettes);
        assert_eq!(Stage::Palettes.next(), Stage::Stats);
        assert_eq!(Stage::Stats.next(), Stage::Sprites);
        assert_eq!(Stage::Sprites.next(), Stage::Done);
        assert_eq!(Stage::Done.next(), Stage::Done);
    }

    #[test]
    fn test_copied_frame_all_flags_set_has_no_inline_fields() {
        // Only the source-frame reference is consumed.
        let data = [0u8; 4];
        let mut walker = FfWalker::new(&data);
        walker.stage = Stage::Sprites;

        walker.walk_copied_frame(0xFF).unwrap();
        assert_eq!(walker.cursor.position(), 4);
    }

    #[test]
    fn test_copied_frame_all_flags_clear_reads_every_field() {
        let counts = [0u16, 1, 2, 3, 4];
        let mut data = vec![0u8; 4 + 2 + 8 + 4];
        for count in counts {
            data.extend_from_slice(&count.to_be_bytes());
            data.resize(data.len() + usize::from(count) * BOX_ENTRY_SIZE, 0);
        }

        let expected = data.len();
        let mut walker = FfWalker::new(&data);
        walker.stage = Stage::Sprites;

        walker.walk_copied_frame(0x00).unwrap();
        assert_eq!(walker.cursor.position(), expected);
    }

    #[test]
    fn test_copied_frame_flags_are_evaluated_independently() {
        // Alternating flags 0b0101_0101, evaluated MSB first: inline
        // fields are the frame length, the draw offsets, and the box
        // groups at positions 4 and 6 (counts 2 and 1 below).
        let mut data = vec![0u8; 4 + 2 + 4];
        data.extend_from_slice(&2u16.to_be_bytes());
        data.resize(data.len() + 2 * BOX_ENTRY_SIZE, 0);
        data.extend_from_slice(&1u16.to_be_bytes());
        data.resize(data.len() + BOX_ENTRY_SIZE, 0);

        let expected = data.len();
        let mut walker = FfWalker::new(&data);
        walker.stage = Stage::Sprites;

        walker.walk_copied_frame(0b0101_0101).unwrap();
        assert_eq!(walker.cursor.position(), expected);
    }
}
