//! Column names used across the pipeline.

/// Raw genotype call code written by the instrument.
pub const CALL: &str = "Call";
/// Daughter plate identifier, e.g. `1003_001_004_BT2`.
pub const DAUGHTER_PLATE: &str = "DaughterPlate";
/// Master plate well, e.g. `A01`.
pub const MASTER_WELL: &str = "MasterWell";
pub const MASTER_PLATE: &str = "MasterPlate";
pub const SUBJECT_ID: &str = "SubjectID";
pub const SNP_ID: &str = "SNPID";
pub const X: &str = "X";
pub const Y: &str = "Y";

/// Human-readable result derived from [`CALL`].
pub const RESULTADO: &str = "Resultado";
pub const EMPRESA: &str = "Empresa";
pub const PROJETO: &str = "Projeto";
pub const PLACA: &str = "Placa";
pub const TESTE: &str = "Teste";
/// Composite key `Placa-MasterWell`.
pub const CHAVE: &str = "Chave";

/// Placeholder columns added empty by the call normalizer, in insertion order.
pub const PLACEHOLDER_COLUMNS: [&str; 4] = [EMPRESA, PROJETO, PLACA, TESTE];

/// Instrument columns dropped before pivoting.
pub const DEFAULT_PRUNED_COLUMNS: [&str; 7] =
    [SUBJECT_ID, X, Y, DAUGHTER_PLATE, MASTER_PLATE, CALL, SNP_ID];
