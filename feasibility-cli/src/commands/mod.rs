pub mod check;

use feasibility_core::utils::GenericResult;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> GenericResult<File> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> GenericResult<File> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}
