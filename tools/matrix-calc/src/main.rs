use anyhow::Result;
use matrix_calc::driver;

fn main() -> Result<()> {
    driver()
}
