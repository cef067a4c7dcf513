use crate::ClientError;
use stellar_xdr::curr::{
    BytesM, Int128Parts, ScBytes, ScString, ScVal, ScVec, StringM, UInt128Parts, VecM,
};

/// A trait for converting native rust values into a `ScVal`.
pub trait IntoScVal {
    fn try_into_val(&self) -> Result<ScVal, ClientError>;
    fn into_val(self) -> ScVal;
}

impl IntoScVal for u32 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(ScVal::U32(*self))
    }

    fn into_val(self) -> ScVal {
        ScVal::U32(self)
    }
}

impl IntoScVal for u64 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(ScVal::U64(*self))
    }

    fn into_val(self) -> ScVal {
        ScVal::U64(self)
    }
}

impl IntoScVal for i32 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(ScVal::I32(*self))
    }

    fn into_val(self) -> ScVal {
        ScVal::I32(self)
    }
}

impl IntoScVal for i64 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(ScVal::I64(*self))
    }

    fn into_val(self) -> ScVal {
        ScVal::I64(self)
    }
}

impl IntoScVal for u128 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(self.into_val())
    }

    fn into_val(self) -> ScVal {
        ScVal::U128(UInt128Parts {
            hi: (self >> 64) as u64,
            lo: self as u64,
        })
    }
}

impl IntoScVal for i128 {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(self.into_val())
    }

    fn into_val(self) -> ScVal {
        ScVal::I128(Int128Parts {
            hi: (self >> 64) as i64,
            lo: self as u64,
        })
    }
}

impl IntoScVal for bool {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        Ok(ScVal::Bool(*self))
    }

    fn into_val(self) -> ScVal {
        ScVal::Bool(self)
    }
}

impl IntoScVal for String {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        let string_m = StringM::<{ u32::MAX }>::try_from(self).map_err(|_| {
            ClientError::XdrEncodingFailed("Failed to convert String to StringM".to_string())
        })?;
        Ok(ScVal::String(ScString::from(string_m)))
    }

    fn into_val(self) -> ScVal {
        let string_m =
            StringM::<{ u32::MAX }>::try_from(self).expect("Failed to convert String to StringM");
        ScVal::String(ScString::from(string_m))
    }
}

impl IntoScVal for [u8; 32] {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        let bytes_m = BytesM::<{ u32::MAX }>::try_from(self).map_err(|_| {
            ClientError::XdrEncodingFailed("Failed to convert Bytes to BytesM".to_string())
        })?;
        Ok(ScVal::Bytes(ScBytes::from(bytes_m)))
    }

    fn into_val(self) -> ScVal {
        let bytes_m =
            BytesM::<{ u32::MAX }>::try_from(self).expect("Failed to convert Bytes to BytesM");
        ScVal::Bytes(ScBytes::from(bytes_m))
    }
}

impl IntoScVal for Vec<ScVal> {
    fn try_into_val(&self) -> Result<ScVal, ClientError> {
        let vec_m = VecM::try_from(self).map_err(|_| {
            ClientError::XdrEncodingFailed("Failed to convert Vec to VecM".to_string())
        })?;
        Ok(ScVal::Vec(Some(ScVec::from(vec_m))))
    }

    fn into_val(self) -> ScVal {
        let vec_m = VecM::try_from(self).expect("Failed to convert Vec to VecM");
        ScVal::Vec(Some(ScVec::from(vec_m)))
    }
}
