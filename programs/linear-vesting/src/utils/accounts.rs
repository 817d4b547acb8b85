use anchor_lang::prelude::*;

/// Deserializes a program-owned account, or `None` if the account has not
/// been created (empty or not owned by `T`'s program).
///
/// Used where a missing account is a domain outcome (unknown plan index,
/// recipient without plans) rather than an account-validation failure.
pub fn try_load<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let value = T::try_deserialize(&mut &data[..])?;
    Ok(Some(value))
}

/// Writes `value` back into an account loaded with [`try_load`].
pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)?;
    Ok(())
}
