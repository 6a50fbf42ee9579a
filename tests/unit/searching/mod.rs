//! Tests for the individual searching algorithms

mod jump;
