use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),
}

/// A contiguous run of blocks on the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DiskMap {
    /// Indexed by file id.
    files: Vec<Span>,
    free: Vec<Span>,
}

#[aoc_generator(day9)]
fn parse(input: &str) -> Result<DiskMap, ParseError> {
    let mut files = Vec::new();
    let mut free = Vec::new();
    let mut start = 0;
    for (ix, b) in input.trim_end().bytes().enumerate() {
        if !b.is_ascii_digit() {
            return Err(ParseError::InvalidDigit(b as char));
        }
        let len = usize::from(b - b'0');
        if ix % 2 == 0 {
            files.push(Span { start, len });
        } else if len > 0 {
            free.push(Span { start, len });
        }
        start += len;
    }
    Ok(DiskMap { files, free })
}

fn layout(disk: &DiskMap) -> Vec<Option<usize>> {
    let size = disk.files.last().map_or(0, |f| f.start + f.len);
    let mut blocks = vec![None; size];
    for (id, file) in disk.files.iter().enumerate() {
        blocks[file.start..file.start + file.len].fill(Some(id));
    }
    blocks
}

fn checksum(blocks: impl IntoIterator<Item = (usize, usize)>) -> usize {
    blocks.into_iter().map(|(pos, id)| pos * id).sum()
}

#[aoc(day9, part1)]
fn part_1(disk: &DiskMap) -> usize {
    let mut blocks = layout(disk);
    let mut left = 0;
    let mut right = blocks.len();
    loop {
        while left < right && blocks[left].is_some() {
            left += 1;
        }
        while right > left && blocks[right - 1].is_none() {
            right -= 1;
        }
        if left + 1 >= right {
            break;
        }
        blocks.swap(left, right - 1);
    }
    checksum(
        blocks
            .into_iter()
            .enumerate()
            .filter_map(|(pos, id)| Some((pos, id?))),
    )
}

#[aoc(day9, part2)]
fn part_2(disk: &DiskMap) -> usize {
    let mut files = disk.files.clone();
    let mut free = disk.free.clone();
    for file in files.iter_mut().rev() {
        let Some(gap) = free
            .iter_mut()
            .take_while(|gap| gap.start < file.start)
            .find(|gap| gap.len >= file.len)
        else {
            continue;
        };
        file.start = gap.start;
        gap.start += file.len;
        gap.len -= file.len;
    }
    checksum(
        files
            .iter()
            .enumerate()
            .flat_map(|(id, file)| (file.start..file.start + file.len).map(move |pos| (pos, id))),
    )
}
