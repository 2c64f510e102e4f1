pub mod color_math;
