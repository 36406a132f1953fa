use crate::data;
use anyhow::Result;

pub fn run() -> Result<()> {
    data::init::init()
}
