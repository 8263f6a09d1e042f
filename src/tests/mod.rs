//! End-to-end scenarios exercising the full model-construction surface.

mod nqueens;
