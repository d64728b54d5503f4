//! Evaluation of the mapped belief grid.
//!
//! Scoring runs once at the end of a run and compares the belief grid to
//! the ground truth cell by cell.
//!
//! ```rust,ignore
//! use parikrama::evaluation::MappingAccuracy;
//!
//! let accuracy = MappingAccuracy::score(&ctx.robot.belief, &ctx.ground_truth);
//! println!("{}", accuracy.summary());
//! ```

mod accuracy;

pub use accuracy::MappingAccuracy;
