use crate::{Error, Result, Stack};

////////////////////////////////////////////////////////////////////////////////

pub type Disk = usize;

/// Three rods with every disk initially on `source`, smallest on top.
#[derive(Debug)]
pub struct HanoiGame {
    height: usize,
    source: Stack<Disk>,
    spare: Stack<Disk>,
    destination: Stack<Disk>,
}

impl HanoiGame {
    pub fn new(height: usize) -> Result<Self> {
        if height < 1 {
            return Err(Error::TowerTooLow { height });
        }

        Ok(Self {
            height,
            source: (1..=height).rev().collect(),
            spare: Stack::new(),
            destination: Stack::new(),
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn source(&self) -> &Stack<Disk> {
        &self.source
    }

    pub fn spare(&self) -> &Stack<Disk> {
        &self.spare
    }

    pub fn destination(&self) -> &Stack<Disk> {
        &self.destination
    }

    /// Moves the whole tower to the destination rod and returns the number
    /// of single-disk moves made. A solved game is left as is.
    pub fn solve(&mut self) -> usize {
        if self.source.is_empty() {
            log::debug!("tower of height {} is already solved", self.height);
            return 0;
        }

        let moves = move_disks(
            self.height,
            &mut self.source,
            &mut self.destination,
            &mut self.spare,
        );
        log::debug!("solved tower of height {} in {moves} moves", self.height);
        moves
    }
}

fn move_disks(
    count: usize,
    source: &mut Stack<Disk>,
    destination: &mut Stack<Disk>,
    spare: &mut Stack<Disk>,
) -> usize {
    if count == 0 {
        return 0;
    }

    let moves = move_disks(count - 1, source, spare, destination);
    move_top(source, destination);
    moves + 1 + move_disks(count - 1, spare, destination, source)
}

fn move_top(source: &mut Stack<Disk>, destination: &mut Stack<Disk>) {
    let Some(disk) = source.pop() else {
        unreachable!("moving a disk off an empty rod");
    };

    debug_assert!(
        !matches!(destination.pick(), Some(&top) if top < disk),
        "disk {disk} placed on a smaller one"
    );
    log::trace!("moving disk {disk}");

    destination.push(disk);
}

////////////////////////////////////////////////////////////////////////////////
