use crate::domain::model::CourseRecord;
use crate::utils::error::Result;
use std::io::Read;

/// 讀取無標題列的課程 CSV：code, name, display name, category, electiveness
pub fn read_course_records<R: Read>(reader: R) -> Result<Vec<CourseRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        // 只取前五欄，多出的欄位 (例如行尾逗號) 忽略
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CourseRecord>().enumerate() {
        let record = row?;
        tracing::debug!("Row {}: {:?}", index + 1, record);
        records.push(record);
    }

    Ok(records)
}

pub fn parse_course_records(content: &str) -> Result<Vec<CourseRecord>> {
    // Excel 匯出的 CSV 常帶 BOM
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    read_course_records(content.as_bytes())
}
