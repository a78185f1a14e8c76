// disk.rs

use crate::error::{Result, ShellError};
use crate::exec;
use crate::util::writeln_ignore_broken_pipe;
use bytes::{Buf, Bytes, BytesMut};
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

pub const SECTOR_SIZE: usize = 512;
/// 0x55 at offset 510, 0xAA at 511.
pub const BOOT_SIGNATURE: u16 = 0xAA55;

pub fn read_boot_sector(path: &Path) -> Result<Bytes> {
    let mut file = File::open(path).map_err(|e| ShellError::path(path, e))?;
    let mut sector = BytesMut::zeroed(SECTOR_SIZE);
    match file.read_exact(&mut sector) {
        Ok(()) => Ok(sector.freeze()),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(ShellError::ShortDevice(path.to_path_buf())),
        Err(e) => Err(ShellError::path(path, e)),
    }
}

pub fn has_boot_signature(sector: &[u8]) -> bool {
    if sector.len() < SECTOR_SIZE {
        return false;
    }
    let mut tail = &sector[SECTOR_SIZE - 2..SECTOR_SIZE];
    tail.get_u16_le() == BOOT_SIGNATURE
}

/// `\l [DEVICE]`: lsblk, then the boot signature verdict when a device is named.
pub fn list_partitions<W: Write>(device: Option<&str>, out: &mut W) -> Result<()> {
    let args: Vec<&str> = device.into_iter().collect();
    exec::run_checked("lsblk", &args)?;
    if let Some(device) = device {
        let sector = read_boot_sector(Path::new(device))?;
        let verdict = if has_boot_signature(&sector) { "bootable" } else { "not bootable" };
        writeln_ignore_broken_pipe(out, format!("{}: {}", device, verdict))?;
    }
    Ok(())
}
