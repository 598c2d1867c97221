// FIXME(stable): Constant traits

pub(crate) const fn i64i128(val: i64) -> i128 {
  val as i128
}

pub(crate) const fn u32i128(val: u32) -> i128 {
  val as i128
}

pub(crate) const fn u32u64(val: u32) -> u64 {
  val as u64
}

pub(crate) const fn u64i128(val: u64) -> i128 {
  val as i128
}

pub(crate) const fn u32i64(val: u32) -> i64 {
  val as i64
}
