//! 機台需求彙總

use changeover_core::{CapacityError, MachineTypeRequirement, OperationRecord, RequirementMap};

/// 需求彙總器
pub struct RequirementAggregator;

impl RequirementAggregator {
    /// 依機台類型加總工序的需求台數
    ///
    /// 未出現在工序中的機台類型不會出現在結果中（與需求 0 台等價）。
    /// 任何一筆記錄無效即中止，不會回傳部分結果。
    pub fn aggregate(operations: &[OperationRecord]) -> changeover_core::Result<RequirementMap> {
        // 先完整檢查，確保錯誤時沒有任何部分計算
        for (index, record) in operations.iter().enumerate() {
            if let Err(reason) = record.check() {
                tracing::warn!("工序記錄無效（第 {} 筆）: {}", index, reason);
                return Err(CapacityError::invalid_operation(index, reason));
            }
        }

        let mut requirements = RequirementMap::new();
        for (index, record) in operations.iter().enumerate() {
            let units = u32::try_from(record.units_needed).map_err(|_| {
                CapacityError::invalid_operation(
                    index,
                    format!("工序 '{}' 的機台數 {} 超出範圍", record.operation, record.units_needed),
                )
            })?;

            let entry = requirements
                .entry(record.machine_type_key().to_string())
                .or_insert(0);
            *entry = entry.checked_add(units).ok_or_else(|| {
                CapacityError::CalculationError(format!(
                    "機台類型 '{}' 的需求台數溢出",
                    record.machine_type_key()
                ))
            })?;
        }

        tracing::debug!(
            "需求彙總完成：工序 {} 筆，機台類型 {} 種",
            operations.len(),
            requirements.len()
        );

        Ok(requirements)
    }

    /// 將彙總結果轉為需求列表（依機台類型排序）
    pub fn to_requirement_list(requirements: &RequirementMap) -> Vec<MachineTypeRequirement> {
        requirements
            .iter()
            .map(|(machine_type, &units)| MachineTypeRequirement::new(machine_type.clone(), units))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn op(operation: &str, machine_type: &str, units: i64) -> OperationRecord {
        OperationRecord::new(operation, machine_type, Decimal::new(50, 2), units)
    }

    #[test]
    fn test_sums_per_machine_type() {
        let operations = vec![
            op("Collar Attach", "Single Needle", 1),
            op("Side Seam", "Overlock 5T", 2),
            op("Top Stitch", "Single Needle", 3),
            op("Bartack", "Bartack", 8),
        ];

        let requirements = RequirementAggregator::aggregate(&operations).unwrap();

        assert_eq!(requirements.len(), 3);
        assert_eq!(requirements["Single Needle"], 4);
        assert_eq!(requirements["Overlock 5T"], 2);
        assert_eq!(requirements["Bartack"], 8);
        assert!(!requirements.contains_key("Flatlock"));

        let list = RequirementAggregator::to_requirement_list(&requirements);
        assert_eq!(list[0], MachineTypeRequirement::new("Bartack", 8));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_machine_type_is_trimmed() {
        let operations = vec![
            op("Hem Bottom", "Flatlock ", 1),
            op("Hem Sleeve", " Flatlock", 1),
        ];

        let requirements = RequirementAggregator::aggregate(&operations).unwrap();
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements["Flatlock"], 2);
    }

    #[test]
    fn test_rejects_zero_units() {
        let operations = vec![
            op("Collar Attach", "Single Needle", 1),
            op("Side Seam", "Overlock 5T", 0),
        ];

        let err = RequirementAggregator::aggregate(&operations).unwrap_err();
        assert!(matches!(err, CapacityError::InvalidOperationRecord { index: 1, .. }));
    }

    #[test]
    fn test_rejects_negative_units() {
        let operations = vec![op("Side Seam", "Overlock 5T", -2)];

        let err = RequirementAggregator::aggregate(&operations).unwrap_err();
        assert!(matches!(err, CapacityError::InvalidOperationRecord { index: 0, .. }));
    }

    #[test]
    fn test_rejects_empty_machine_type() {
        let operations = vec![op("Collar Attach", "", 1)];

        let err = RequirementAggregator::aggregate(&operations).unwrap_err();
        assert!(matches!(err, CapacityError::InvalidOperationRecord { index: 0, .. }));
    }

    #[test]
    fn test_rejects_units_beyond_range() {
        let operations = vec![op("Collar Attach", "Single Needle", i64::from(u32::MAX) + 1)];

        let err = RequirementAggregator::aggregate(&operations).unwrap_err();
        assert!(matches!(err, CapacityError::InvalidOperationRecord { .. }));
    }

    #[test]
    fn test_overflowing_sum_is_an_error() {
        let operations = vec![
            op("A", "Single Needle", i64::from(u32::MAX)),
            op("B", "Single Needle", 1),
        ];

        let err = RequirementAggregator::aggregate(&operations).unwrap_err();
        assert!(matches!(err, CapacityError::CalculationError(_)));
    }

    #[test]
    fn test_empty_operation_list() {
        let requirements = RequirementAggregator::aggregate(&[]).unwrap();
        assert!(requirements.is_empty());
    }
}
