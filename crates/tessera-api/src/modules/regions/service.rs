use super::model::Region;

pub struct RegionService;

impl RegionService {
    /// Static catalog. Real persistence is an external collaborator; this
    /// service only demonstrates the guarded read path.
    pub fn list() -> Vec<Region> {
        let regions = [
            (1, "AND", "Andalucía"),
            (2, "ARA", "Aragón"),
            (3, "AST", "Asturias"),
            (4, "CAT", "Cataluña"),
            (5, "EXT", "Extremadura"),
            (6, "GAL", "Galicia"),
        ];

        regions
            .into_iter()
            .map(|(id, code, name)| Region {
                id,
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect()
    }

    pub fn find(id: u32) -> Option<Region> {
        Self::list().into_iter().find(|region| region.id == id)
    }
}
