mod common;
mod guidance;
