//! Record Store
//!
//! Owns the slot file and implements create / get / update / delete / list
//! keyed by slot index.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::config::{Config, SyncStrategy};
use crate::error::{Result, StockError};
use crate::record::{decode_record, encode_record, Record, Status, RECORD_SIZE};

use super::{OccupiedSlots, SlotId};

/// Fixed-slot record store
///
/// ## Concurrency:
/// - `file`: Protected by a Mutex; each operation holds it for its whole
///   seek + read/write sequence, so `create` cannot hand the same free slot
///   to two callers.
/// - All methods use `&self` (no exclusive access needed)
pub struct RecordStore {
    /// Path of the slot file
    path: PathBuf,

    /// The only handle to the file, held for the store's lifetime
    file: Mutex<File>,

    /// Number of slots in the file
    capacity: usize,

    /// When to fsync after writes
    sync_strategy: SyncStrategy,
}

impl RecordStore {
    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Validate the config
    /// 2. If the file is absent, create it and write `capacity` empty slots
    /// 3. Open the file read/write
    /// 4. Check the file holds exactly `capacity` slots
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let path = config.data_file.clone();
        if !path.exists() {
            Self::preallocate(&path, config.capacity)?;
        }

        let file = OpenOptions::new().read(true).write(true).open(&path)?;

        let expected = Self::file_size_for(config.capacity)?;
        let actual = file.metadata()?.len();
        if actual != expected {
            tracing::warn!(
                path = %path.display(),
                actual,
                expected,
                "data file has the wrong size"
            );
            return Err(StockError::CorruptStore(format!(
                "{} is {} bytes, expected {} ({} slots of {} bytes)",
                path.display(),
                actual,
                expected,
                config.capacity,
                RECORD_SIZE
            )));
        }

        tracing::info!("Opened data file {} ({} slots)", path.display(), config.capacity);

        Ok(Self {
            path,
            file: Mutex::new(file),
            capacity: config.capacity,
            sync_strategy: config.sync_strategy,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses the default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Find the lowest empty slot
    ///
    /// Returns `Ok(None)` when every slot is occupied.
    pub fn find_free_slot(&self) -> Result<Option<SlotId>> {
        let mut file = self.file.lock();
        self.find_free_slot_locked(&mut file)
    }

    /// Insert a record into the lowest free slot and return its index
    ///
    /// The stored status is always Occupied, whatever `record.status` says.
    pub fn create(&self, record: &Record) -> Result<SlotId> {
        let mut file = self.file.lock();

        let index = self
            .find_free_slot_locked(&mut file)?
            .ok_or(StockError::StoreFull {
                capacity: self.capacity,
            })?;

        let stored = Record {
            status: Status::Occupied,
            ..record.clone()
        };
        self.write_slot(&mut file, index, &stored)?;

        tracing::debug!(index, "record created");
        Ok(index)
    }

    /// Read the record at `index`
    ///
    /// Returns `NotOccupied` when the slot is empty.
    pub fn get(&self, index: SlotId) -> Result<Record> {
        self.check_index(index)?;

        let mut file = self.file.lock();
        let record = Self::read_slot(&mut file, index)?;

        if record.is_occupied() {
            Ok(record)
        } else {
            Err(StockError::NotOccupied(index))
        }
    }

    /// Overwrite the slot at `index` with `record`, status included
    ///
    /// No occupancy check: any slot in range may be written.
    pub fn update(&self, index: SlotId, record: &Record) -> Result<()> {
        self.check_index(index)?;

        let mut file = self.file.lock();
        self.write_slot(&mut file, index, record)?;

        tracing::debug!(index, status = ?record.status, "record updated");
        Ok(())
    }

    /// Soft-delete the record at `index`
    ///
    /// Only the status byte is rewritten; the remaining 508 bytes are left in
    /// place and ignored by later reads. Returns `NotOccupied` if already empty.
    pub fn delete(&self, index: SlotId) -> Result<()> {
        self.check_index(index)?;

        let mut file = self.file.lock();
        let record = Self::read_slot(&mut file, index)?;
        if !record.is_occupied() {
            return Err(StockError::NotOccupied(index));
        }

        file.seek(SeekFrom::Start(Self::slot_offset(index)))?;
        file.write_all(&[Status::Empty as u8])?;
        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }

        tracing::debug!(index, "record deleted");
        Ok(())
    }

    /// All occupied slots, ascending by index
    pub fn list(&self) -> Result<Vec<(SlotId, Record)>> {
        self.iter().collect()
    }

    /// Lazily scan occupied slots, ascending by index
    ///
    /// Every call starts a fresh scan from slot 0.
    pub fn iter(&self) -> OccupiedSlots<'_> {
        OccupiedSlots::new(self)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Flush written slots to disk
    pub fn sync(&self) -> Result<()> {
        self.file.lock().sync_data()?;
        Ok(())
    }

    /// Sync and release the file handle
    pub fn close(self) -> Result<()> {
        self.sync()?;
        tracing::info!("Closed data file {}", self.path.display());
        Ok(())
    }

    /// Number of slots in the file
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Path of the slot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Slot Access (used by OccupiedSlots)
    // =========================================================================

    /// Read any slot in range, empty or not
    pub(super) fn read_raw(&self, index: SlotId) -> Result<Record> {
        self.check_index(index)?;
        let mut file = self.file.lock();
        Self::read_slot(&mut file, index)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Create the file and fill it with `capacity` empty slots
    ///
    /// Slots are written to the staging file, synced, then renamed over
    /// `path`, so a failed pass never leaves a short data file behind.
    fn preallocate(path: &Path, capacity: usize) -> Result<()> {
        tracing::info!("Data file {} does not exist, creating {} slots", path.display(), capacity);

        let staging = Self::staging_path(path);
        if let Err(e) = Self::write_empty_slots(&staging, capacity) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                tracing::warn!(path = %staging.display(), error = %cleanup, "failed to remove staging file");
            }
            return Err(e);
        }

        fs::rename(&staging, path)?;
        Ok(())
    }

    fn write_empty_slots(path: &Path, capacity: usize) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let empty = encode_record(&Record::empty());
        let mut writer = BufWriter::new(file);
        for _ in 0..capacity {
            writer.write_all(&empty)?;
        }
        writer.flush()?;

        let file = writer
            .into_inner()
            .map_err(|e| StockError::Io(e.into_error()))?;
        file.sync_all()?;

        Ok(())
    }

    fn find_free_slot_locked(&self, file: &mut File) -> Result<Option<SlotId>> {
        for index in 0..self.capacity as SlotId {
            let record = Self::read_slot(file, index)?;
            if !record.is_occupied() {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }

    /// Reject indexes outside `0..capacity` before any seek happens
    fn check_index(&self, index: SlotId) -> Result<()> {
        if index < 0 || index as u64 >= self.capacity as u64 {
            return Err(StockError::InvalidIndex {
                index,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    fn read_slot(file: &mut File, index: SlotId) -> Result<Record> {
        file.seek(SeekFrom::Start(Self::slot_offset(index)))?;

        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact(&mut buf)?;

        decode_record(&buf)
    }

    fn write_slot(&self, file: &mut File, index: SlotId, record: &Record) -> Result<()> {
        file.seek(SeekFrom::Start(Self::slot_offset(index)))?;
        file.write_all(&encode_record(record))?;

        if self.sync_strategy == SyncStrategy::EveryWrite {
            file.sync_data()?;
        }
        Ok(())
    }

    /// Byte offset of a slot; callers have already bounds-checked `index`
    fn slot_offset(index: SlotId) -> u64 {
        index as u64 * RECORD_SIZE as u64
    }

    fn file_size_for(capacity: usize) -> Result<u64> {
        (capacity as u64)
            .checked_mul(RECORD_SIZE as u64)
            .ok_or_else(|| StockError::Config(format!("capacity {} is too large", capacity)))
    }

    /// Sibling file a new store is written to before being renamed into place
    ///
    /// A leftover staging file from an interrupted creation is overwritten by
    /// the next open, so it never blocks the store.
    pub fn staging_path(path: &Path) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".creating");
        path.with_file_name(name)
    }
}
