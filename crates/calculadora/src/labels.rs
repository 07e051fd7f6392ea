//! Fixed Spanish display strings shared by both front ends

/// Window and panel title
pub const TITLE: &str = "Calculadora";

/// Label of the first operand field
pub const FIRST_LABEL: &str = "Primer número";

/// Label of the second operand field
pub const SECOND_LABEL: &str = "Segundo número";

/// Placeholder of the first operand field
pub const FIRST_PLACEHOLDER: &str = "Ingresa el primer número";

/// Placeholder of the second operand field
pub const SECOND_PLACEHOLDER: &str = "Ingresa el segundo número";

/// Caption of the clear control
pub const CLEAR: &str = "Limpiar";

/// Output panel text while there is neither a result nor an error
pub const IDLE_PROMPT: &str = "Ingresa números y selecciona una operación";

/// Prefix of the success message
pub const RESULT_PREFIX: &str = "Resultado: ";

/// History panel title
pub const HISTORY_TITLE: &str = "Historial";

/// History panel text when there are no entries
pub const EMPTY_HISTORY: &str = "No hay operaciones recientes";
