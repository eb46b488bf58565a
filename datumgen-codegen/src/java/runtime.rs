//! Well-known identifiers of the tuple runtime the generated source targets.

/// Protected tuple entry field inherited from the base record.
pub const TUPLE_ENTRY_FIELD: &str = "_tupleEntry";

/// Name of the aggregate field-name constant.
pub const FIELDS_CONSTANT: &str = "FIELDS";

/// Base record function registering a field name for a class.
pub const FIELD_NAME_FN: &str = "fieldName";

/// Base record function checking a tuple entry's fields.
pub const VALIDATE_FIELDS_FN: &str = "validateFields";

/// Default base record type.
pub const DEFAULT_BASE_RECORD: &str = "com.scaleunlimited.cascading.BaseDatum";

/// Tuple runtime imports, in emission order.
pub const TUPLE_IMPORTS: &[&str] = &[
    "cascading.tuple.Fields",
    "cascading.tuple.Tuple",
    "cascading.tuple.TupleEntry",
];

/// Header placed at the top of every generated unit.
pub const FILE_HEADER: &str = concat!(
    "/**\n",
    " * Autogenerated by Scale Unlimited's DatumCompiler\n",
    " * \n",
    " * DO NOT EDIT DIRECTLY\n",
    " * SUB-CLASS TO CUSTOMIZE\n",
    " */\n",
);
