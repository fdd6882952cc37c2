//! Bulk consumption helpers, built on `Read` alone.

use std::io::{self, Read};

use crate::error::Error;
use crate::reader::Reader;

impl Reader<'_> {
    /// Read everything that is left.
    pub fn read_all(&mut self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.read_to_end(&mut out)?;
        Ok(out)
    }

    /// Read everything that is left as UTF-8 text.
    pub fn read_all_string(&mut self) -> Result<String, Error> {
        Ok(String::from_utf8(self.read_all()?)?)
    }

    /// Read everything that is left, split after each record separator.
    ///
    /// Separators stay attached; only the last record may lack one.
    pub fn read_all_records(&mut self) -> Result<Vec<Vec<u8>>, Error> {
        let out = self.read_all()?;
        let rs = self.vars().rs;
        Ok(out.split_inclusive(|&b| b == rs).map(<[u8]>::to_vec).collect())
    }

    /// Text version of `read_all_records`.
    pub fn read_all_strings(&mut self) -> Result<Vec<String>, Error> {
        self.read_all_records()?
            .into_iter()
            .map(|record| String::from_utf8(record).map_err(Error::from))
            .collect()
    }

    /// Run the whole stream for the steps' side effects, dropping the output.
    pub fn discard(&mut self) -> Result<(), Error> {
        io::copy(self, &mut io::sink())?;
        Ok(())
    }
}
